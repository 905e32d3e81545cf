//! Ping command - simple liveness reply.

use async_trait::async_trait;
use command_dispatch::{CommandHandler, Invocation};

pub struct PingHandler;

#[async_trait]
impl CommandHandler for PingHandler {
    async fn execute(&self, inv: &Invocation<'_>) -> anyhow::Result<()> {
        inv.reply("pong").await
    }
}

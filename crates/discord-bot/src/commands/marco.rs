//! Marco command - replies to 'marco' with 'Polo!'.

use async_trait::async_trait;
use command_dispatch::{CommandHandler, Invocation};

pub struct MarcoHandler;

#[async_trait]
impl CommandHandler for MarcoHandler {
    async fn execute(&self, inv: &Invocation<'_>) -> anyhow::Result<()> {
        inv.reply("Polo!").await
    }
}

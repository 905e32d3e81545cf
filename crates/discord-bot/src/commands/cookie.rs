//! Cookie command - replies with a cookie emoticon.

use async_trait::async_trait;
use command_dispatch::{CommandHandler, Invocation};

pub struct CookieHandler;

#[async_trait]
impl CommandHandler for CookieHandler {
    async fn execute(&self, inv: &Invocation<'_>) -> anyhow::Result<()> {
        inv.reply(":cookie:").await
    }
}

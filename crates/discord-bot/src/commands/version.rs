//! Version command - displays the bot info banner.

use async_trait::async_trait;
use command_dispatch::{CommandHandler, Invocation};

pub struct VersionHandler {
    info: String,
}

impl VersionHandler {
    pub fn new(info: impl Into<String>) -> Self {
        Self { info: info.into() }
    }
}

#[async_trait]
impl CommandHandler for VersionHandler {
    async fn execute(&self, inv: &Invocation<'_>) -> anyhow::Result<()> {
        inv.reply(&self.info).await
    }
}

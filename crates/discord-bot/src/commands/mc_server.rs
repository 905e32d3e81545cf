//! McServer command - prints the Minecraft server address, if configured.

use async_trait::async_trait;
use command_dispatch::{CommandHandler, Invocation};

pub struct McServerHandler {
    server: Option<String>,
}

impl McServerHandler {
    pub fn new(server: Option<String>) -> Self {
        Self { server }
    }
}

#[async_trait]
impl CommandHandler for McServerHandler {
    async fn execute(&self, inv: &Invocation<'_>) -> anyhow::Result<()> {
        match &self.server {
            Some(addr) => inv.reply(&format!("Main MC Server: {}", addr)).await,
            None => inv.reply("NO MC Servers Available").await,
        }
    }
}

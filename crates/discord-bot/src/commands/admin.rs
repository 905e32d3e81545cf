//! Admin commands - restart and shutdown.
//!
//! Both announce themselves through the reply sink and then signal the
//! main loop over the control channel; the loop owns the actual restart
//! and process exit.

use anyhow::Context;
use async_trait::async_trait;
use command_dispatch::{CommandHandler, Invocation};
use tokio::sync::mpsc;

/// Signals from admin commands to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    Restart,
    Shutdown,
}

pub struct ResetHandler {
    control: mpsc::Sender<ControlSignal>,
}

impl ResetHandler {
    pub fn new(control: mpsc::Sender<ControlSignal>) -> Self {
        Self { control }
    }
}

#[async_trait]
impl CommandHandler for ResetHandler {
    async fn execute(&self, inv: &Invocation<'_>) -> anyhow::Result<()> {
        inv.reply("Bot Restarting...").await?;
        self.control
            .send(ControlSignal::Restart)
            .await
            .context("control channel closed")
    }
}

pub struct ShutdownHandler {
    control: mpsc::Sender<ControlSignal>,
}

impl ShutdownHandler {
    pub fn new(control: mpsc::Sender<ControlSignal>) -> Self {
        Self { control }
    }
}

#[async_trait]
impl CommandHandler for ShutdownHandler {
    async fn execute(&self, inv: &Invocation<'_>) -> anyhow::Result<()> {
        inv.reply("Bot Shutting Down...").await?;
        self.control
            .send(ControlSignal::Shutdown)
            .await
            .context("control channel closed")
    }
}

//! Common test utilities for integration tests.

use std::path::Path;
use std::sync::Arc;

use command_dispatch::{CallerContext, CommandRegistry, DispatchConfig, Dispatcher};
use command_log::CommandLog;
use discord_bot::commands::{command_table, ControlSignal};
use discord_bot::sinks::{DiscordReplySink, GuildRoleResolver};
use discord_client::DiscordClient;
use secrecy::SecretString;
use tokio::sync::mpsc;
use wiremock::MockServer;

pub const MUSIC_CHANNEL: &str = "55";
pub const GUILD: &str = "7";

/// Create a Discord client pointed at a mock server.
pub fn test_client(server: &MockServer) -> Arc<DiscordClient> {
    Arc::new(DiscordClient::new(server.uri(), &SecretString::new("test-token".into())).unwrap())
}

/// Wire the shipped command table to a mock-backed dispatcher.
pub fn test_dispatcher(
    client: Arc<DiscordClient>,
    log_path: &Path,
) -> (Dispatcher, mpsc::Receiver<ControlSignal>) {
    let (control_tx, control_rx) = mpsc::channel(1);
    let table = command_table(
        None,
        "Test Bot Version 0.0.0".to_string(),
        Some(MUSIC_CHANNEL.to_string()),
        control_tx,
    );
    let registry = CommandRegistry::register(table).unwrap();

    let dispatcher = Dispatcher::new(
        registry,
        DispatchConfig {
            admin_role: "BotAdmin".into(),
        },
        Arc::new(DiscordReplySink::new(client.clone())),
        Arc::new(CommandLog::new(log_path)),
        Arc::new(GuildRoleResolver::new(client)),
    );
    (dispatcher, control_rx)
}

/// A caller posting from the given channel.
pub fn caller(channel_id: &str) -> CallerContext {
    CallerContext {
        user_id: "1001".into(),
        user_tag: "becky#0001".into(),
        channel_id: channel_id.into(),
        guild_id: Some(GUILD.into()),
    }
}

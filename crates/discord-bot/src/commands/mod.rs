//! Bot command handlers and the command table.

mod admin;
mod bubblegum;
mod cookie;
mod help;
mod marco;
mod mc_server;
mod music;
mod ping;
mod version;

pub use admin::{ControlSignal, ResetHandler, ShutdownHandler};
pub use bubblegum::BubblegumHandler;
pub use cookie::CookieHandler;
pub use help::HelpHandler;
pub use marco::MarcoHandler;
pub use mc_server::McServerHandler;
pub use music::MusicChannelHandler;
pub use ping::PingHandler;
pub use version::VersionHandler;

use std::sync::Arc;

use command_dispatch::{CommandDefinition, CommandInfo, TriggerKind};
use tokio::sync::mpsc;

const HELP_DESCRIPTION: &str = "Srsly Becky? It's pretty obvious m8";

/// Patterns the music bot answers to; matched anywhere a message starts
/// with one of them.
const MUSIC_PATTERNS: [&str; 4] = ["!play*", "!stop*", "!skip*", "!fs*"];

/// Assemble the full command table in registration order.
///
/// Registration order is also help-listing order, so `!!help` leads. The
/// music moderation patterns are only present when a music channel is
/// configured.
pub fn command_table(
    mc_server: Option<String>,
    bot_info: String,
    music_channel_id: Option<String>,
    control: mpsc::Sender<ControlSignal>,
) -> Vec<CommandDefinition> {
    let mut defs = vec![
        CommandDefinition::literal(
            "!!version",
            "Displays the currently running Bot Version",
            Arc::new(VersionHandler::new(bot_info)),
        ),
        CommandDefinition::literal("!!ping", "Pong!", Arc::new(PingHandler)),
        CommandDefinition::literal(
            "!!cookie",
            "Give a cookie, Get a Cookie!",
            Arc::new(CookieHandler),
        ),
        CommandDefinition::literal("!!marco", "Polo!", Arc::new(MarcoHandler)),
        CommandDefinition::literal(
            "!!mcserver",
            "Minecraft Server IPs",
            Arc::new(McServerHandler::new(mc_server)),
        ),
        CommandDefinition::literal(
            "*!reset",
            "Restarts the bot",
            Arc::new(ResetHandler::new(control.clone())),
        )
        .privileged(),
        CommandDefinition::literal(
            "*!shutdown",
            "Stops the bot",
            Arc::new(ShutdownHandler::new(control)),
        )
        .privileged(),
        CommandDefinition::wildcard("*bubblegum*", "Bubblegum meme", Arc::new(BubblegumHandler)),
    ];

    if let Some(music_channel_id) = music_channel_id {
        let music = Arc::new(MusicChannelHandler::new(music_channel_id));
        for pattern in MUSIC_PATTERNS {
            defs.push(CommandDefinition::wildcard(
                pattern,
                "Music channel moderation",
                music.clone(),
            ));
        }
    }

    // The help listing shows literal commands only, help itself first.
    let mut rows = vec![CommandInfo {
        trigger: "!!help".into(),
        description: HELP_DESCRIPTION.into(),
        requires_privilege: false,
    }];
    rows.extend(
        defs.iter()
            .filter(|d| d.kind == TriggerKind::Literal)
            .map(|d| d.info()),
    );

    let mut table = vec![CommandDefinition::literal(
        "!!help",
        HELP_DESCRIPTION,
        Arc::new(HelpHandler::new(rows)),
    )];
    table.extend(defs);
    table
}

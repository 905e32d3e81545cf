//! Squishy Overlord Bot - Main entry point.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use command_dispatch::{CallerContext, CommandRegistry, DispatchConfig, Dispatcher};
use command_log::CommandLog;
use discord_bot::commands::{command_table, ControlSignal};
use discord_bot::config::Config;
use discord_bot::error::AppResult;
use discord_bot::sinks::{DiscordReplySink, GuildRoleResolver};
use discord_client::{DiscordClient, Message, MessageReceiver};
use tokio::signal;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.bot.log_level);

    info!("{}", config.bot.info());
    info!("Starting up...");

    // Load the login token and create the client
    let token = config
        .discord
        .token()
        .context("Can't load discord key token")?;
    let client = Arc::new(DiscordClient::new(&config.discord.api_url, &token)?);

    // Connectivity check before login
    if !client.health_check().await {
        error!("Discord API not reachable at {}", config.discord.api_url);
        return Err(anyhow::anyhow!("Discord API not reachable").into());
    }

    let me = client.current_user().await.context("Login failed")?;
    info!("Logged in as {}!", me.tag());

    let channels = config.discord.watch_channels();
    if channels.is_empty() {
        return Err(anyhow::anyhow!("No channels configured to watch (DISCORD__CHANNELS)").into());
    }

    // Build the command table and dispatcher
    let (control_tx, mut control_rx) = mpsc::channel::<ControlSignal>(1);
    let table = command_table(
        config.bot.mc_server.clone(),
        config.bot.info(),
        config.bot.music_channel_id.clone(),
        control_tx,
    );
    let registry = CommandRegistry::register(table)?;
    info!("Registered {} commands", registry.len());

    let dispatcher = Dispatcher::new(
        registry,
        DispatchConfig {
            admin_role: config.bot.admin_role.clone(),
        },
        Arc::new(DiscordReplySink::new(client.clone())),
        Arc::new(CommandLog::new(&config.bot.command_log)),
        Arc::new(GuildRoleResolver::new(client.clone())),
    );

    info!("Listening for messages...");

    let poll_interval = config.discord.poll_interval;
    let mut stream = Box::pin(new_receiver(&client, &channels, poll_interval).stream());

    // Main message loop
    loop {
        tokio::select! {
            Some(message) = stream.next() => {
                // Never dispatch the bot's own (or any bot's) messages
                if message.author.id == me.id || message.author.bot {
                    continue;
                }

                let caller = caller_context(&message, config.discord.guild_id.as_deref());
                if let Err(e) = dispatcher.dispatch(&message.content, &caller).await {
                    error!("Handler error: {}", e);
                    let _ = client
                        .create_message(&message.channel_id, "Sorry, something went wrong.")
                        .await;
                }
            }
            Some(control) = control_rx.recv() => {
                match control {
                    ControlSignal::Restart => {
                        info!("Restart requested");
                        match client.current_user().await {
                            Ok(user) => info!("Logged in as {}!", user.tag()),
                            Err(e) => error!("Re-login failed: {}", e),
                        }
                        stream = Box::pin(new_receiver(&client, &channels, poll_interval).stream());
                    }
                    ControlSignal::Shutdown => {
                        info!("Shutdown requested");
                        break;
                    }
                }
            }
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("Shutting down...");
    Ok(())
}

fn new_receiver(
    client: &Arc<DiscordClient>,
    channels: &[String],
    poll_interval: Duration,
) -> MessageReceiver {
    MessageReceiver::new((**client).clone(), channels.to_vec(), poll_interval)
}

fn caller_context(message: &Message, guild_id: Option<&str>) -> CallerContext {
    CallerContext {
        user_id: message.author.id.clone(),
        user_tag: message.author.tag(),
        channel_id: message.channel_id.clone(),
        guild_id: guild_id.map(String::from),
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

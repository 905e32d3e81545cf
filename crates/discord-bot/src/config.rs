//! Application configuration loaded from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Discord configuration
    #[serde(default)]
    pub discord: DiscordConfig,

    /// Bot configuration
    #[serde(default)]
    pub bot: BotConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscordConfig {
    /// Discord REST API endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bot token; wins over `token_file` when set
    #[serde(default)]
    pub token: Option<SecretString>,

    /// Key file holding the token on its third line
    #[serde(default = "default_token_file")]
    pub token_file: PathBuf,

    /// Poll interval for messages
    #[serde(default = "default_poll_interval", with = "humantime_serde")]
    pub poll_interval: Duration,

    /// Guild used for role lookups
    #[serde(default)]
    pub guild_id: Option<String>,

    /// Channels to watch, comma-separated
    #[serde(default)]
    pub channels: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Display name
    #[serde(default = "default_bot_name")]
    pub name: String,

    /// Author line shown by !!version
    #[serde(default)]
    pub author: String,

    /// Role required for admin commands
    #[serde(default = "default_admin_role")]
    pub admin_role: String,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Channel where music-bot commands are allowed; unset disables the
    /// music moderation patterns
    #[serde(default)]
    pub music_channel_id: Option<String>,

    /// Minecraft server address advertised by !!mcserver
    #[serde(default)]
    pub mc_server: Option<String>,

    /// Append-only audit log for admin commands
    #[serde(default = "default_command_log")]
    pub command_log: PathBuf,
}

// Default implementations
impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: None,
            token_file: default_token_file(),
            poll_interval: default_poll_interval(),
            guild_id: None,
            channels: String::new(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
            author: String::new(),
            admin_role: default_admin_role(),
            log_level: default_log_level(),
            music_channel_id: None,
            mc_server: None,
            command_log: default_command_log(),
        }
    }
}

// Default value functions
fn default_api_url() -> String {
    "https://discord.com/api/v10".into()
}

fn default_token_file() -> PathBuf {
    "DiscordLoginToken.key".into()
}

fn default_poll_interval() -> Duration {
    Duration::from_secs(2)
}

fn default_bot_name() -> String {
    "Squishy Overlord Bot".into()
}

fn default_admin_role() -> String {
    "BotAdmin".into()
}

fn default_log_level() -> String {
    "info".into()
}

fn default_command_log() -> PathBuf {
    "logs/CmdLog.log".into()
}

impl DiscordConfig {
    /// Channel ids to poll, split out of the comma-separated setting.
    pub fn watch_channels(&self) -> Vec<String> {
        self.channels
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect()
    }

    /// Resolve the login token: explicit config wins, otherwise the third
    /// line of the key file.
    pub fn token(&self) -> Result<SecretString> {
        if let Some(token) = &self.token {
            return Ok(token.clone());
        }

        let data = std::fs::read_to_string(&self.token_file).with_context(|| {
            format!("failed to read key file {}", self.token_file.display())
        })?;
        let line = data.lines().nth(2).map(str::trim).unwrap_or_default();
        if line.is_empty() {
            anyhow::bail!(
                "key file {} has no token on line 3",
                self.token_file.display()
            );
        }

        Ok(SecretString::new(line.to_string()))
    }
}

impl BotConfig {
    /// Name/version/author banner used at startup and by `!!version`.
    pub fn info(&self) -> String {
        let mut info = format!("{} Version {}", self.name, env!("CARGO_PKG_VERSION"));
        if !self.author.is_empty() {
            info.push_str(&format!("\nAuthor: {}", self.author));
        }
        info
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    // Channel ids and snowflakes must stay strings.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

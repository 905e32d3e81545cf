//! Discord REST API types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Discord user.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    /// `"0"` for accounts migrated off the legacy tag system.
    #[serde(default)]
    pub discriminator: String,
    #[serde(default)]
    pub bot: bool,
}

impl User {
    /// Human-readable tag: `name#1234`, or the bare username for accounts
    /// without a legacy discriminator.
    pub fn tag(&self) -> String {
        if self.discriminator.is_empty() || self.discriminator == "0" {
            self.username.clone()
        } else {
            format!("{}#{}", self.username, self.discriminator)
        }
    }
}

/// A message in a channel.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub id: String,
    pub channel_id: String,
    pub author: User,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// A guild role.
#[derive(Debug, Clone, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
}

/// A guild member; `roles` holds role ids.
#[derive(Debug, Clone, Deserialize)]
pub struct GuildMember {
    pub user: Option<User>,
    pub roles: Vec<String>,
}

/// Outgoing message payload.
#[derive(Debug, Clone, Serialize)]
pub struct CreateMessage {
    pub content: String,
}

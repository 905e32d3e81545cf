//! Discord HTTP client.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

use crate::error::DiscordError;
use crate::types::*;

/// Discord REST API client.
///
/// Thin HTTP plumbing only; the protocol belongs to Discord. The bot token
/// is installed as a default `Authorization` header and never logged.
#[derive(Clone)]
pub struct DiscordClient {
    client: Client,
    base_url: String,
}

impl DiscordClient {
    /// Create a new client against `base_url` (e.g.
    /// `https://discord.com/api/v10`).
    pub fn new(base_url: impl Into<String>, token: &SecretString) -> Result<Self, DiscordError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bot {}", token.expose_secret()))
            .map_err(|_| DiscordError::InvalidToken)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Check the API is reachable. The gateway endpoint answers without
    /// touching the token, so this is a pure connectivity probe.
    pub async fn health_check(&self) -> bool {
        self.client
            .get(format!("{}/gateway", self.base_url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    /// Fetch the bot's own user, verifying the token is valid.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<User, DiscordError> {
        let response = self
            .client
            .get(format!("{}/users/@me", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            return Err(DiscordError::Api(msg));
        }

        Ok(response.json().await?)
    }

    /// Fetch messages in a channel, oldest first.
    ///
    /// With a cursor, only messages newer than `after` are returned. The
    /// API responds newest-first; the result is re-sorted into arrival
    /// order by snowflake id.
    #[instrument(skip(self))]
    pub async fn messages_after(
        &self,
        channel_id: &str,
        after: Option<&str>,
    ) -> Result<Vec<Message>, DiscordError> {
        let mut request = self
            .client
            .get(format!("{}/channels/{}/messages", self.base_url, channel_id))
            .query(&[("limit", "100")]);
        if let Some(after) = after {
            request = request.query(&[("after", after)]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            return Err(DiscordError::Api(msg));
        }

        let mut messages: Vec<Message> = response.json().await?;
        messages.sort_by_key(|m| snowflake(&m.id));
        debug!("Received {} messages", messages.len());
        Ok(messages)
    }

    /// Send a message to a channel.
    #[instrument(skip(self, content))]
    pub async fn create_message(
        &self,
        channel_id: &str,
        content: &str,
    ) -> Result<(), DiscordError> {
        let request = CreateMessage {
            content: content.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/channels/{}/messages", self.base_url, channel_id))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            warn!("Send failed: {}", msg);
            return Err(DiscordError::SendFailed(msg));
        }

        debug!("Sent message to channel {}", channel_id);
        Ok(())
    }

    /// List a guild's roles.
    #[instrument(skip(self))]
    pub async fn guild_roles(&self, guild_id: &str) -> Result<Vec<Role>, DiscordError> {
        let response = self
            .client
            .get(format!("{}/guilds/{}/roles", self.base_url, guild_id))
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            return Err(DiscordError::Api(msg));
        }

        Ok(response.json().await?)
    }

    /// Fetch a guild member.
    #[instrument(skip(self))]
    pub async fn guild_member(
        &self,
        guild_id: &str,
        user_id: &str,
    ) -> Result<GuildMember, DiscordError> {
        let response = self
            .client
            .get(format!(
                "{}/guilds/{}/members/{}",
                self.base_url, guild_id, user_id
            ))
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            return Err(DiscordError::Api(msg));
        }

        Ok(response.json().await?)
    }
}

/// Snowflake ids carry their creation time in the high bits; numeric order
/// is arrival order.
fn snowflake(id: &str) -> u64 {
    id.parse().unwrap_or(0)
}

//! Discord-backed dispatcher collaborators.

use std::sync::Arc;

use async_trait::async_trait;
use command_dispatch::{CallerContext, PrivilegeResolver, ReplySink};
use discord_client::DiscordClient;
use tracing::warn;

/// Sends replies as channel messages mentioning the caller.
pub struct DiscordReplySink {
    client: Arc<DiscordClient>,
}

impl DiscordReplySink {
    pub fn new(client: Arc<DiscordClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReplySink for DiscordReplySink {
    async fn send(&self, caller: &CallerContext, text: &str) -> anyhow::Result<()> {
        let content = format!("<@{}> {}", caller.user_id, text);
        self.client
            .create_message(&caller.channel_id, &content)
            .await?;
        Ok(())
    }
}

/// Resolves privileges against guild roles, by role name.
///
/// Lookup failures answer `false`: a caller whose roles cannot be checked
/// is not privileged.
pub struct GuildRoleResolver {
    client: Arc<DiscordClient>,
}

impl GuildRoleResolver {
    pub fn new(client: Arc<DiscordClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PrivilegeResolver for GuildRoleResolver {
    async fn has_role(&self, caller: &CallerContext, role: &str) -> bool {
        let Some(guild_id) = caller.guild_id.as_deref() else {
            return false;
        };

        let roles = match self.client.guild_roles(guild_id).await {
            Ok(roles) => roles,
            Err(e) => {
                warn!("Role lookup failed: {}", e);
                return false;
            }
        };
        let Some(wanted) = roles.into_iter().find(|r| r.name == role) else {
            return false;
        };

        match self.client.guild_member(guild_id, &caller.user_id).await {
            Ok(member) => member.roles.iter().any(|id| *id == wanted.id),
            Err(e) => {
                warn!("Member lookup failed: {}", e);
                false
            }
        }
    }
}

//! Music-channel moderation.
//!
//! The music bot's commands (`!play`, `!stop`, ...) are only welcome in
//! the designated music channel. Anywhere else, the caller gets pointed
//! at the right channel; inside it, this handler stays silent.

use async_trait::async_trait;
use command_dispatch::{CommandHandler, Invocation};

pub struct MusicChannelHandler {
    music_channel_id: String,
}

impl MusicChannelHandler {
    pub fn new(music_channel_id: impl Into<String>) -> Self {
        Self {
            music_channel_id: music_channel_id.into(),
        }
    }
}

#[async_trait]
impl CommandHandler for MusicChannelHandler {
    async fn execute(&self, inv: &Invocation<'_>) -> anyhow::Result<()> {
        if inv.caller.channel_id == self.music_channel_id {
            return Ok(());
        }

        inv.reply(&format!(
            "Music Commands can only be used in the <#{}> Channel!",
            self.music_channel_id
        ))
        .await
    }
}

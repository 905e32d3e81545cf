//! Replies to any message containing the word 'bubblegum' with the meme.

use async_trait::async_trait;
use command_dispatch::{CommandHandler, Invocation};

const BUBBLEGUM_RESPONSE: &str = "shut your bubble gum dumb dumb skin tone chicken bone google chrome no homo flip phone disowned ice cream cone garden gnome extra chromosome metronome dimmadome genome full blown monochrome student loan indiana jones over grown flint stone X and Y Chromosome friend zome sylvester stalone sierra leone auto zone friend zone professionally seen silver patrone big headed ass UP";

pub struct BubblegumHandler;

#[async_trait]
impl CommandHandler for BubblegumHandler {
    async fn execute(&self, inv: &Invocation<'_>) -> anyhow::Result<()> {
        inv.reply(BUBBLEGUM_RESPONSE).await
    }
}

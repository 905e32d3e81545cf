//! Message receiver with polling.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::sleep;
use tokio_stream::Stream;
use tracing::{debug, error};

use crate::client::DiscordClient;
use crate::types::Message;

/// Polls the configured channels and yields new messages in arrival order.
///
/// The first poll of a channel only primes the cursor, so old history is
/// never replayed.
pub struct MessageReceiver {
    client: DiscordClient,
    channels: Vec<String>,
    poll_interval: Duration,
}

impl MessageReceiver {
    pub fn new(client: DiscordClient, channels: Vec<String>, poll_interval: Duration) -> Self {
        Self {
            client,
            channels,
            poll_interval,
        }
    }

    /// Start receiving messages as an async stream.
    pub fn stream(self) -> impl Stream<Item = Message> {
        async_stream::stream! {
            let mut cursors: HashMap<String, String> = HashMap::new();

            loop {
                for channel in &self.channels {
                    let after = cursors.get(channel.as_str()).cloned();
                    let primed = after.is_some();
                    match self.client.messages_after(channel, after.as_deref()).await {
                        Ok(messages) => {
                            let newest = messages.last().map(|m| m.id.clone());
                            // An empty channel primes at the zero snowflake,
                            // so its first real message is still delivered.
                            cursors.insert(
                                channel.clone(),
                                newest.unwrap_or_else(|| "0".to_string()),
                            );

                            if primed {
                                for msg in messages {
                                    let preview: String = msg.content.chars().take(50).collect();
                                    debug!("Received: {} from {}", preview, msg.author.tag());
                                    yield msg;
                                }
                            }
                        }
                        Err(e) => {
                            error!("Receive error: {}", e);
                            // Back off on error
                            sleep(Duration::from_secs(5)).await;
                            continue;
                        }
                    }
                }

                sleep(self.poll_interval).await;
            }
        }
    }
}

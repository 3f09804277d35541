use serenity::async_trait;
use serenity::builder::{CreateMessage, EditMessage};
use serenity::model::id::{ChannelId, MessageId};
use serenity::prelude::Context;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Failed to deliver message: {0}")]
pub struct TransportError(pub String);

/// The two things the bot ever does to a chat: post a message, and later
/// rewrite a message it posted.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    type Handle: Send + Sync;

    async fn send(&self, text: &str) -> Result<Self::Handle, TransportError>;

    async fn edit(&self, handle: &Self::Handle, text: &str) -> Result<(), TransportError>;
}

/// Replies into the Discord channel a command came from
pub struct SerenityChannel<'a> {
    ctx: &'a Context,
    channel_id: ChannelId,
}

impl<'a> SerenityChannel<'a> {
    pub fn new(ctx: &'a Context, channel_id: ChannelId) -> Self {
        Self { ctx, channel_id }
    }
}

#[async_trait]
impl<'a> ChatTransport for SerenityChannel<'a> {
    type Handle = MessageId;

    async fn send(&self, text: &str) -> Result<MessageId, TransportError> {
        let message = self.channel_id
            .send_message(self.ctx, CreateMessage::default().content(text))
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(message.id)
    }

    async fn edit(&self, handle: &MessageId, text: &str) -> Result<(), TransportError> {
        self.channel_id
            .edit_message(self.ctx, *handle, EditMessage::new().content(text))
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use tokio::sync::Mutex;

    /// Keeps every message in memory so tests can read the conversation back
    #[derive(Default)]
    pub struct RecordingTransport {
        pub messages: Mutex<Vec<String>>,
        pub edits: Mutex<Vec<(usize, String)>>,
    }

    impl RecordingTransport {
        /// Messages as the user would see them now, edits applied
        pub async fn visible(&self) -> Vec<String> {
            let mut messages = self.messages.lock().await.clone();
            for (index, text) in self.edits.lock().await.iter() {
                messages[*index] = text.clone();
            }
            messages
        }
    }

    #[async_trait]
    impl ChatTransport for RecordingTransport {
        type Handle = usize;

        async fn send(&self, text: &str) -> Result<usize, TransportError> {
            let mut messages = self.messages.lock().await;
            messages.push(text.to_string());
            Ok(messages.len() - 1)
        }

        async fn edit(&self, handle: &usize, text: &str) -> Result<(), TransportError> {
            self.edits.lock().await.push((*handle, text.to_string()));
            Ok(())
        }
    }
}

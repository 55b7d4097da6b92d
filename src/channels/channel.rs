//! The `Channel` trait and the message types that cross it.

use std::pin::Pin;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::Stream;
use uuid::Uuid;

use crate::error::ChannelError;

/// An inbound message from an originator. Ephemeral — never persisted.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    /// The external identity that sent this message; replies are addressed
    /// to it.
    pub originator_id: String,
    /// Message text.
    pub text: String,
    /// Unique id of this message.
    pub message_id: Uuid,
    /// When the message was received.
    pub timestamp: DateTime<Utc>,
}

impl IncomingMessage {
    pub fn new(originator_id: &str, text: &str) -> Self {
        Self {
            originator_id: originator_id.to_string(),
            text: text.to_string(),
            message_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        }
    }
}

/// A reply addressed to an originator.
#[derive(Debug, Clone)]
pub struct OutgoingReply {
    pub originator_id: String,
    pub text: String,
}

impl OutgoingReply {
    pub fn new(originator_id: &str, text: impl Into<String>) -> Self {
        Self {
            originator_id: originator_id.to_string(),
            text: text.into(),
        }
    }
}

/// Stream of incoming messages produced by a started channel.
pub type MessageStream = Pin<Box<dyn Stream<Item = IncomingMessage> + Send>>;

/// A bidirectional message transport (CLI, chat window, peer agent).
///
/// Channels are pure I/O: the Porter owns all conversation logic.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Channel name for logging.
    fn name(&self) -> &str;

    /// Start the channel and return its stream of incoming messages.
    async fn start(&self) -> Result<MessageStream, ChannelError>;

    /// Deliver a reply to its originator.
    async fn respond(&self, reply: &OutgoingReply) -> Result<(), ChannelError>;
}

//! Wire codec abstraction.

use super::{
    error::{DecodeError, EncodeError},
    message::Message,
};

/// Converts raw frames into [`Message`]s and back.
///
/// Implementations live in the infrastructure layer.
pub trait MessageCodec: Send + Sync {
    /// Parse exactly one value from a raw inbound frame.
    fn decode(&self, raw: &[u8]) -> Result<Message, DecodeError>;

    /// Serialize a message into one outbound text frame.
    fn encode(&self, message: &Message) -> Result<String, EncodeError>;
}

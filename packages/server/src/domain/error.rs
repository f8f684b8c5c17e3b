//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ConnectionId validation error
    #[error("ConnectionId cannot be empty")]
    ConnectionIdEmpty,

    /// ConnectionId invalid format error (not a valid UUID format)
    #[error("ConnectionId must be a valid UUID format (got: {0})")]
    ConnectionIdInvalidFormat(String),
}

/// Errors raised while turning an inbound frame into a [`Message`](super::Message)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Frame bytes are not UTF-8 text
    #[error("frame is not valid UTF-8: {0}")]
    InvalidUtf8(String),

    /// Frame holds no value (empty or whitespace only)
    #[error("frame is empty")]
    Empty,

    /// Frame is not syntactically valid JSON
    #[error("frame is not valid JSON: {0}")]
    Syntax(String),

    /// Frame holds more than one top-level value
    #[error("frame contains more than one top-level value")]
    MultipleValues,
}

/// Errors raised while serializing a [`Message`](super::Message)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to encode message: {0}")]
pub struct EncodeError(pub String);

/// Errors related to the connection registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A connection with the same id is already registered
    #[error("Connection '{0}' is already registered")]
    AlreadyRegistered(String),
}

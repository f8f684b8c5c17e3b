//! Domain layer for the relay.
//!
//! This module contains the connection model, the message model and the
//! broadcast rule, independent of transport and storage concerns.

pub mod broadcast;
pub mod codec;
pub mod entity;
pub mod error;
pub mod factory;
pub mod message;
pub mod repository;
pub mod value_object;

pub use broadcast::{BroadcastReport, broadcast};
pub use codec::MessageCodec;
pub use entity::{Connection, DeliveryOutcome};
pub use error::{DecodeError, EncodeError, RepositoryError, ValueObjectError};
pub use factory::ConnectionIdFactory;
pub use message::{Message, Number};
pub use repository::ConnectionRepository;
pub use value_object::{ConnectionId, ConnectionState, Timestamp};

#[cfg(test)]
pub use repository::MockConnectionRepository;

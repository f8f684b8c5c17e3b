//! Repository trait for the connection registry.
//!
//! The domain layer defines the interface; the infrastructure layer provides
//! the implementation (dependency inversion).

use async_trait::async_trait;

use super::{
    entity::Connection, error::RepositoryError, value_object::ConnectionId,
};

/// Authoritative set of currently open connections.
///
/// All operations may run concurrently with each other.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionRepository: Send + Sync {
    /// Add a connection.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::AlreadyRegistered` if the id is taken.
    async fn register(&self, connection: Connection) -> Result<(), RepositoryError>;

    /// Remove a connection, returning it if it was present.
    ///
    /// Idempotent: removing an unknown id returns `None`.
    async fn deregister(&self, id: &ConnectionId) -> Option<Connection>;

    /// Copy of every registered connection at this instant.
    async fn snapshot(&self) -> Vec<Connection>;

    /// Look up one connection.
    async fn get(&self, id: &ConnectionId) -> Option<Connection>;

    /// Number of registered connections.
    async fn count(&self) -> usize;
}

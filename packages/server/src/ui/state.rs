//! Server state shared by every handler.

use std::sync::Arc;

use crate::{
    domain::{ConnectionRepository, MessageCodec},
    infrastructure::{codec::JsonCodec, repository::InMemoryConnectionRepository},
};

/// Shared application state
///
/// Each server instance owns its own registry.
pub struct AppState {
    /// Repository（接続レジストリの抽象化）
    pub repository: Arc<dyn ConnectionRepository>,
    /// Frame codec
    pub codec: Arc<dyn MessageCodec>,
}

impl AppState {
    pub fn new(repository: Arc<dyn ConnectionRepository>, codec: Arc<dyn MessageCodec>) -> Self {
        Self { repository, codec }
    }
}

impl Default for AppState {
    /// Empty in-memory registry with the JSON codec.
    fn default() -> Self {
        Self::new(
            Arc::new(InMemoryConnectionRepository::new()),
            Arc::new(JsonCodec),
        )
    }
}

//! WebSocket message relay library.
//!
//! Clients connect over WebSocket and send JSON values; every value that
//! decodes is re-serialized and broadcast to all connected clients,
//! the sender included.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use ui::{Server, ServerConfig, ServerError, run};

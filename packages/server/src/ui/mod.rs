//! WebSocket relay server implementation.

mod config;
mod error;
mod handler;
mod runner;
mod signal;
pub mod state;

pub use config::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
pub use error::ServerError;
pub use runner::{Server, build_router, run};
pub use signal::shutdown_signal;

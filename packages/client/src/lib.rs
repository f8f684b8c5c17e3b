//! Command-line client for the relay.
//!
//! Three modes: print every broadcast (`listen`), type messages at a prompt
//! (`chat`), or publish mock robot telemetry on a fixed interval with automatic
//! reconnection (`telemetry`).

pub mod error;
pub mod session;
pub mod telemetry;

pub use error::ClientError;
pub use session::{DEFAULT_URL, run_chat, run_listen};
pub use telemetry::{TelemetryConfig, TelemetryReading, run_telemetry};

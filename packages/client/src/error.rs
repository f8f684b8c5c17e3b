//! Client error definitions.

use thiserror::Error;
use tokio_tungstenite::tungstenite;

#[derive(Debug, Error)]
pub enum ClientError {
    /// WebSocket handshake failed
    #[error("failed to connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: tungstenite::Error,
    },

    /// Read or write failed on an established connection
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),

    #[error("failed to serialize message: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] rustyline::error::ReadlineError),

    /// `tokio::time::interval` cannot tick with a zero period
    #[error("telemetry interval must be greater than zero")]
    ZeroInterval,

    /// Server closed the connection
    #[error("connection closed by server")]
    Closed,
}

//! HTTP API response DTOs for the relay.

use serde::{Deserialize, Serialize};

use crate::domain::Connection;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}

/// Connection detail for list and detail endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionDetailDto {
    pub id: String,
    pub state: String,
    pub connected_at: Option<String>, // ISO 8601 (JST)
}

/// Connection list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionListDto {
    pub count: usize,
    pub connections: Vec<ConnectionDetailDto>,
}

impl From<&Connection> for ConnectionDetailDto {
    fn from(connection: &Connection) -> Self {
        Self {
            id: connection.id.as_str().to_string(),
            state: connection.state().to_string(),
            connected_at: relay_shared::time::timestamp_to_jst_rfc3339(
                connection.connected_at.value(),
            ),
        }
    }
}

//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::ConnectionId,
    infrastructure::dto::http::{ConnectionDetailDto, ConnectionListDto, HealthDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}

/// Get list of registered connections, oldest first
pub async fn list_connections(State(state): State<Arc<AppState>>) -> Json<ConnectionListDto> {
    let mut connections = state.repository.snapshot().await;
    connections.sort_by(|a, b| {
        a.connected_at
            .cmp(&b.connected_at)
            .then_with(|| a.id.cmp(&b.id))
    });

    Json(ConnectionListDto {
        count: connections.len(),
        connections: connections.iter().map(ConnectionDetailDto::from).collect(),
    })
}

/// Get connection detail by ID
pub async fn get_connection_detail(
    State(state): State<Arc<AppState>>,
    Path(connection_id): Path<String>,
) -> Result<Json<ConnectionDetailDto>, StatusCode> {
    let id = ConnectionId::try_from(connection_id).map_err(|e| {
        tracing::debug!("Invalid connection id: {}", e);
        StatusCode::BAD_REQUEST
    })?;

    state
        .repository
        .get(&id)
        .await
        .map(|connection| Json(ConnectionDetailDto::from(&connection)))
        .ok_or(StatusCode::NOT_FOUND)
}

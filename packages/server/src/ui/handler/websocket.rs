//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::ConnectionId,
    ui::state::AppState,
    usecase::{
        ConnectClientUseCase, DisconnectClientUseCase, RelayError, RelayMessageUseCase,
    },
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    // Create a channel for this client to receive broadcasts
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    let connect_usecase = ConnectClientUseCase::new(state.repository.clone());
    let connection = match connect_usecase.execute(tx).await {
        Ok(connection) => connection,
        Err(e) => {
            tracing::warn!("Rejecting connection: {}", e);
            return;
        }
    };
    tracing::info!("Client '{}' connected and registered", connection.id);

    let (mut sender, mut receiver) = socket.split();

    let relay_usecase = RelayMessageUseCase::new(state.repository.clone(), state.codec.clone());
    let reader_connection = connection.clone();

    // Spawn a task to receive frames from this client and relay them
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", reader_connection.id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    relay_frame(&relay_usecase, &reader_connection.id, text.as_str().as_bytes())
                        .await;
                }
                Message::Binary(bytes) => {
                    relay_frame(&relay_usecase, &reader_connection.id, &bytes).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Pong(_) => {}
                Message::Close(_) => {
                    tracing::info!("Client '{}' requested close", reader_connection.id);
                    reader_connection.begin_close();
                    break;
                }
            }
        }
    });

    // Spawn a task to forward broadcasts to this client
    let writer_id = connection.id.clone();
    let mut send_task = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if let Err(e) = sender.send(Message::Text(frame.into())).await {
                tracing::debug!("Failed to write to '{}': {}", writer_id, e);
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    connection.begin_close();
    let disconnect_usecase = DisconnectClientUseCase::new(state.repository.clone());
    if disconnect_usecase.execute(&connection).await {
        tracing::info!(
            "Client '{}' disconnected and removed from registry ({} remaining)",
            connection.id,
            disconnect_usecase.count_remaining_connections().await
        );
    }
}

/// Decode one frame and broadcast it; malformed frames are logged and dropped.
async fn relay_frame(usecase: &RelayMessageUseCase, from: &ConnectionId, raw: &[u8]) {
    match usecase.execute(from, raw).await {
        Ok(report) => {
            tracing::info!(
                "Broadcast from '{}': delivered={} skipped={} failed={}",
                from,
                report.delivered,
                report.skipped,
                report.failed
            );
        }
        Err(RelayError::Decode(e)) => {
            tracing::warn!("Dropping frame from '{}' ({} bytes): {}", from, raw.len(), e);
        }
        Err(e) => {
            tracing::error!("Failed to relay frame from '{}': {}", from, e);
        }
    }
}

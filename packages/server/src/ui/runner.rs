//! Server startup and lifecycle.

use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::domain::ConnectionRepository;

use super::{
    config::ServerConfig,
    error::ServerError,
    handler::{get_connection_detail, health_check, list_connections, websocket_handler},
    shutdown_signal,
    state::AppState,
};

/// Build the router: WebSocket upgrades on `/` and `/ws`, plus the HTTP API.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(websocket_handler))
        .route("/ws", get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/connections", get(list_connections))
        .route("/api/connections/{connection_id}", get(get_connection_detail))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// A bound relay server that has not started accepting yet.
pub struct Server {
    listener: TcpListener,
    state: Arc<AppState>,
}

impl Server {
    /// Bind the listening endpoint with a fresh registry.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Bind` if the address cannot be bound.
    pub async fn bind(config: &ServerConfig) -> Result<Self, ServerError> {
        Self::bind_with_state(config, AppState::default()).await
    }

    /// Bind the listening endpoint with the given state.
    pub async fn bind_with_state(config: &ServerConfig, state: AppState) -> Result<Self, ServerError> {
        let addr = config.socket_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        Ok(Self {
            listener,
            state: Arc::new(state),
        })
    }

    /// Actual bound address (useful with port `0`).
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Registry owned by this server.
    pub fn repository(&self) -> Arc<dyn ConnectionRepository> {
        self.state.repository.clone()
    }

    /// Serve until `shutdown` resolves.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let Server { listener, state } = self;
        if let Ok(addr) = listener.local_addr() {
            tracing::info!("Relay server listening on ws://{}", addr);
        }

        axum::serve(listener, build_router(state))
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Relay server stopped");
        Ok(())
    }

    /// Serve until Ctrl-C or SIGTERM.
    pub async fn run_until_signal(self) -> Result<(), ServerError> {
        self.run_until(shutdown_signal()).await
    }
}

/// Bind according to `config` and serve until a shutdown signal.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    Server::bind(&config).await?.run_until_signal().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Connection, ConnectionIdFactory, MockConnectionRepository, Timestamp},
        infrastructure::codec::JsonCodec,
    };
    use tokio::sync::{mpsc, oneshot};

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        // テスト項目: ポート 0 でバインドすると実際のポートが割り当てられる
        let server = Server::bind(&ServerConfig::localhost_ephemeral()).await.unwrap();
        let addr = server.local_addr().unwrap();
        assert_ne!(addr.port(), 0);
        assert_eq!(server.repository().count().await, 0);
    }

    #[tokio::test]
    async fn test_bind_port_in_use() {
        // テスト項目: 使用中のポートへのバインドは ServerError::Bind になる
        // given (前提条件):
        let first = Server::bind(&ServerConfig::localhost_ephemeral()).await.unwrap();
        let taken = first.local_addr().unwrap();

        // when (操作):
        let result = Server::bind(&ServerConfig::new(taken.ip(), taken.port())).await;

        // then (期待する結果):
        assert!(matches!(result, Err(ServerError::Bind { addr, .. }) if addr == taken));
    }

    #[tokio::test]
    async fn test_bind_with_injected_repository() {
        // テスト項目: 注入したリポジトリが HTTP API から参照される
        // given (前提条件):
        let (tx, _rx) = mpsc::unbounded_channel();
        let connection = Connection::new(ConnectionIdFactory::generate(), Timestamp::new(1_000), tx);
        let expected_id = connection.id.to_string();

        let mut repository = MockConnectionRepository::new();
        repository
            .expect_snapshot()
            .times(1)
            .returning(move || vec![connection.clone()]);
        let state = AppState::new(Arc::new(repository), Arc::new(JsonCodec));

        let server = Server::bind_with_state(&ServerConfig::localhost_ephemeral(), state)
            .await
            .unwrap();
        let addr = server.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.run_until(async move {
            let _ = shutdown_rx.await;
        }));

        // when (操作):
        let body: serde_json::Value = reqwest::get(format!("http://{addr}/api/connections"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(body["count"], 1);
        assert_eq!(body["connections"][0]["id"], expected_id.as_str());
        assert_eq!(body["connections"][0]["state"], "open");

        let _ = shutdown_tx.send(());
        handle.await.unwrap().unwrap();
    }
}

//! Shared fixtures for integration tests.
//!
//! `TestServer` runs a relay in-process on an ephemeral port and stops it on drop.
//! `TestClient` is a thin WebSocket client with timeouts on every read.

#![allow(dead_code)]

use std::{net::SocketAddr, time::Duration};

use futures_util::{SinkExt, StreamExt};
use relay_server::{Server, ServerConfig};
use tokio::{net::TcpStream, sync::oneshot, time::timeout};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

const READ_TIMEOUT: Duration = Duration::from_secs(3);
const WAIT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub async fn start() -> Self {
        let server = Server::bind(&ServerConfig::localhost_ephemeral())
            .await
            .expect("Failed to bind test server");
        let addr = server.local_addr().expect("Failed to get local addr");
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(server.run_until(async move {
            let _ = rx.await;
        }));

        Self {
            addr,
            shutdown: Some(tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    /// URL without a path, as the original dashboard clients use it
    pub fn root_ws_url(&self) -> String {
        format!("ws://{}", self.addr)
    }

    pub async fn connection_count(&self) -> usize {
        let body: serde_json::Value = reqwest::get(format!("{}/api/connections", self.base_url()))
            .await
            .expect("Failed to send request")
            .json()
            .await
            .expect("Failed to parse JSON");
        body["count"].as_u64().expect("count should be a number") as usize
    }

    /// Poll the HTTP API until the registry holds `expected` connections.
    pub async fn wait_for_connections(&self, expected: usize) {
        let result = timeout(WAIT_TIMEOUT, async {
            while self.connection_count().await != expected {
                tokio::time::sleep(Duration::from_millis(20)).await;
            }
        })
        .await;
        assert!(
            result.is_ok(),
            "registry did not reach {expected} connections (now {})",
            self.connection_count().await
        );
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

pub struct TestClient {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl TestClient {
    pub async fn connect(url: &str) -> Self {
        let (stream, _response) = connect_async(url)
            .await
            .expect("Failed to connect WebSocket");
        Self { stream }
    }

    pub async fn send_text(&mut self, text: &str) {
        self.stream
            .send(Message::text(text.to_owned()))
            .await
            .expect("Failed to send text frame");
    }

    pub async fn send_binary(&mut self, bytes: Vec<u8>) {
        self.stream
            .send(Message::binary(bytes))
            .await
            .expect("Failed to send binary frame");
    }

    /// Next text frame, skipping control frames.
    pub async fn recv_text(&mut self) -> String {
        timeout(READ_TIMEOUT, async {
            loop {
                match self.stream.next().await {
                    Some(Ok(Message::Text(text))) => return text.as_str().to_owned(),
                    Some(Ok(Message::Ping(_) | Message::Pong(_))) => continue,
                    other => panic!("unexpected frame: {other:?}"),
                }
            }
        })
        .await
        .expect("timed out waiting for a text frame")
    }

    pub async fn recv_json(&mut self) -> serde_json::Value {
        let text = self.recv_text().await;
        serde_json::from_str(&text).expect("broadcast frame should be JSON")
    }

    /// Assert that no data frame arrives within `duration`.
    pub async fn expect_silence(&mut self, duration: Duration) {
        if let Ok(frame) = timeout(duration, self.stream.next()).await {
            panic!("expected no frame, got {frame:?}");
        }
    }

    /// Close handshake.
    pub async fn close(mut self) {
        let _ = self.stream.close(None).await;
    }

    /// Drop the TCP connection without a close handshake.
    pub fn abort(self) {
        drop(self.stream);
    }
}

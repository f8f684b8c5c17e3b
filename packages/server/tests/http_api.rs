//! HTTP API integration tests.
//!
//! Tests for REST API endpoints (health check, connection list, connection details).

mod fixtures;
use fixtures::{TestClient, TestServer};

#[tokio::test]
async fn test_health_endpoint() {
    // テスト項目: /api/health エンドポイントが正常に動作する
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/health", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_connections_list_endpoint() {
    // テスト項目: /api/connections が接続中のクライアント一覧を返す
    // given (前提条件):
    let server = TestServer::start().await;
    let _alice = TestClient::connect(&server.ws_url()).await;
    let _bob = TestClient::connect(&server.ws_url()).await;
    server.wait_for_connections(2).await;

    // when (操作):
    let body: serde_json::Value = reqwest::get(format!("{}/api/connections", server.base_url()))
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");

    // then (期待する結果):
    assert_eq!(body["count"], 2);
    let connections = body["connections"].as_array().unwrap();
    assert_eq!(connections.len(), 2);
    for connection in connections {
        assert!(connection["id"].is_string());
        assert_eq!(connection["state"], "open");
        assert!(connection["connected_at"].is_string());
    }
}

#[tokio::test]
async fn test_connection_detail_endpoint_success() {
    // テスト項目: /api/connections/{id} が接続の詳細を返す
    // given (前提条件):
    let server = TestServer::start().await;
    let _alice = TestClient::connect(&server.ws_url()).await;
    server.wait_for_connections(1).await;
    let list: serde_json::Value = reqwest::get(format!("{}/api/connections", server.base_url()))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = list["connections"][0]["id"].as_str().unwrap().to_string();

    // when (操作):
    let response = reqwest::get(format!("{}/api/connections/{}", server.base_url(), id))
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["state"], "open");
}

#[tokio::test]
async fn test_connection_detail_endpoint_not_found() {
    // テスト項目: 存在しない接続 ID には 404 を返す
    let server = TestServer::start().await;

    let response = reqwest::get(format!(
        "{}/api/connections/00000000-0000-4000-8000-000000000000",
        server.base_url()
    ))
    .await
    .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_connection_detail_endpoint_bad_request() {
    // テスト項目: UUID 形式でない接続 ID には 400 を返す
    let server = TestServer::start().await;

    let response = reqwest::get(format!("{}/api/connections/alice", server.base_url()))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

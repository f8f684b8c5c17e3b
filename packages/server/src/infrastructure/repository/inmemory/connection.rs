//! InMemory Connection Repository 実装
//!
//! ドメイン層が定義する ConnectionRepository trait の具体的な実装。
//! HashMap をインメモリのレジストリとして使用します。
//!
//! snapshot() はロック中にハンドルをコピーして返すため、ブロードキャスト中に
//! register / deregister が走ってもイテレーションが壊れることはありません。

use std::{
    collections::{HashMap, hash_map::Entry},
    sync::Arc,
};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Connection, ConnectionId, ConnectionRepository, RepositoryError};

/// インメモリ Connection Repository 実装
#[derive(Debug, Default, Clone)]
pub struct InMemoryConnectionRepository {
    /// 接続中のクライアント（outbox を含むハンドル）
    connections: Arc<Mutex<HashMap<ConnectionId, Connection>>>,
}

impl InMemoryConnectionRepository {
    /// 空のレジストリを作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConnectionRepository for InMemoryConnectionRepository {
    async fn register(&self, connection: Connection) -> Result<(), RepositoryError> {
        let mut connections = self.connections.lock().await;
        match connections.entry(connection.id.clone()) {
            Entry::Occupied(entry) => Err(RepositoryError::AlreadyRegistered(
                entry.key().as_str().to_string(),
            )),
            Entry::Vacant(entry) => {
                entry.insert(connection);
                Ok(())
            }
        }
    }

    async fn deregister(&self, id: &ConnectionId) -> Option<Connection> {
        let mut connections = self.connections.lock().await;
        connections.remove(id)
    }

    async fn snapshot(&self) -> Vec<Connection> {
        let connections = self.connections.lock().await;
        connections.values().cloned().collect()
    }

    async fn get(&self, id: &ConnectionId) -> Option<Connection> {
        let connections = self.connections.lock().await;
        connections.get(id).cloned()
    }

    async fn count(&self) -> usize {
        let connections = self.connections.lock().await;
        connections.len()
    }
}

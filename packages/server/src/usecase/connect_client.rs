//! UseCase: クライアント接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectClientUseCase::execute() メソッド
//! - 接続ハンドルの生成とレジストリへの登録
//!
//! ### なぜこのテストが必要か
//! - 登録された接続だけがブロードキャスト対象になることを保証
//! - 登録失敗時にエラーが UI 層へ伝わることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規接続の登録
//! - 異常系：ID 重複による登録失敗

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::domain::{Connection, ConnectionIdFactory, ConnectionRepository, Timestamp};

use super::error::ConnectError;

/// クライアント接続のユースケース
pub struct ConnectClientUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ConnectionRepository>,
}

impl ConnectClientUseCase {
    /// 新しい ConnectClientUseCase を作成
    pub fn new(repository: Arc<dyn ConnectionRepository>) -> Self {
        Self { repository }
    }

    /// クライアント接続を実行
    ///
    /// # Arguments
    ///
    /// * `outbox` - このクライアントへ送るフレームのチャンネル
    ///
    /// # Returns
    ///
    /// * `Ok(Connection)` - 登録済みの接続ハンドル
    /// * `Err(ConnectError)` - 登録失敗
    pub async fn execute(&self, outbox: UnboundedSender<String>) -> Result<Connection, ConnectError> {
        let connection = Connection::new(ConnectionIdFactory::generate(), Timestamp::now(), outbox);
        self.repository.register(connection.clone()).await?;
        Ok(connection)
    }
}

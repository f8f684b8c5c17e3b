//! UseCase: クライアント切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectClientUseCase::execute() メソッド
//! - レジストリからの削除と接続状態の Closed への遷移
//!
//! ### なぜこのテストが必要か
//! - 切断した接続がブロードキャスト対象から外れることを保証
//! - どちら側から切断しても登録解除が 1 回で完了することを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：接続の登録解除
//! - エッジケース：同じ接続の二重登録解除（冪等）

use std::sync::Arc;

use crate::domain::{Connection, ConnectionRepository};

/// クライアント切断のユースケース
pub struct DisconnectClientUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ConnectionRepository>,
}

impl DisconnectClientUseCase {
    /// 新しい DisconnectClientUseCase を作成
    pub fn new(repository: Arc<dyn ConnectionRepository>) -> Self {
        Self { repository }
    }

    /// クライアント切断を実行
    ///
    /// 接続を Closed にしてからレジストリから削除する。
    /// 既に削除済みの場合は何もしない。
    ///
    /// # Returns
    ///
    /// * `true` - この呼び出しで削除された
    /// * `false` - 既に削除済みだった
    pub async fn execute(&self, connection: &Connection) -> bool {
        connection.mark_closed();
        self.repository.deregister(&connection.id).await.is_some()
    }

    /// 残りの接続数を取得
    pub async fn count_remaining_connections(&self) -> usize {
        self.repository.count().await
    }
}

//! UseCase: メッセージ中継処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RelayMessageUseCase::execute() / broadcast() メソッド
//! - フレームのデコードと、送信者を含む全接続へのブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - 送信者自身を含む全員に届くことを保証
//! - 不正なフレームがブロードキャストに到達しないことを確認
//! - 一部の接続の送信失敗が他の接続への配送を妨げないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：3 接続へのブロードキャスト
//! - 異常系：JSON でないフレーム
//! - エッジケース：ブロードキャスト中の切断

use std::sync::Arc;

use crate::domain::{
    BroadcastReport, ConnectionId, ConnectionRepository, Message, MessageCodec, broadcast,
};

use super::error::RelayError;

/// メッセージ中継のユースケース
pub struct RelayMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ConnectionRepository>,
    /// フレームのデコード / エンコード
    codec: Arc<dyn MessageCodec>,
}

impl RelayMessageUseCase {
    /// 新しい RelayMessageUseCase を作成
    pub fn new(repository: Arc<dyn ConnectionRepository>, codec: Arc<dyn MessageCodec>) -> Self {
        Self { repository, codec }
    }

    /// 受信フレームの中継を実行
    ///
    /// # Arguments
    ///
    /// * `from` - フレームを送ってきた接続の ID（ログ用）
    /// * `raw` - 受信したフレームのバイト列
    ///
    /// # Returns
    ///
    /// * `Ok(BroadcastReport)` - 配送結果の集計
    /// * `Err(RelayError::Decode)` - フレームを破棄した（誰にも送っていない）
    pub async fn execute(&self, from: &ConnectionId, raw: &[u8]) -> Result<BroadcastReport, RelayError> {
        let message = self.codec.decode(raw)?;
        tracing::debug!("Decoded {} message from '{}'", message.kind(), from);
        self.broadcast(&message).await
    }

    /// メッセージを全接続（送信者を含む）にブロードキャスト
    ///
    /// エンコードは 1 回だけ行い、レジストリのスナップショットに対して配送する。
    pub async fn broadcast(&self, message: &Message) -> Result<BroadcastReport, RelayError> {
        let frame = self.codec.encode(message)?;
        let targets = self.repository.snapshot().await;
        Ok(broadcast(&frame, &targets))
    }
}

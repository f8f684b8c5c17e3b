//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{DecodeError, EncodeError, RepositoryError};

/// 接続処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectError {
    /// 同じ ConnectionId が既に登録されている
    #[error("Connection id '{0}' is already registered")]
    DuplicateConnectionId(String),
}

impl From<RepositoryError> for ConnectError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::AlreadyRegistered(id) => Self::DuplicateConnectionId(id),
        }
    }
}

/// メッセージ中継処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// フレームをメッセージとして解釈できない（フレームは破棄される）
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// メッセージを再シリアライズできない
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

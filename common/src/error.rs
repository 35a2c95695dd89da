//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing key: {0}")]
    MissingKey(String),

    #[error("Not an array: {0}")]
    InvalidCollection(String),

    #[error("Invalid record: {collection}[{index}]: {message}")]
    InvalidRecord {
        collection: String,
        index: usize,
        message: String,
    },

    #[error("Invalid rating for app {id}: {value:?}")]
    InvalidRating { id: String, value: String },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

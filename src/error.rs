use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use how_the_feels_common::ErrorBody;
use thiserror::Error;

use crate::classifier::ClassifierError;

/// 入力テキストが無い場合の応答メッセージ
pub const NO_TEXT_MESSAGE: &str = "No text provided";
/// 解析失敗時の応答メッセージ（詳細は含めない）
pub const ANALYZE_FAILED_MESSAGE: &str = "Failed to analyze emotions";

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("テキストが指定されていません")]
    MissingText,

    #[error("分類API呼び出しエラー: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("分類APIがタイムアウトしました ({0}秒)")]
    Timeout(u64),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] how_the_feels_common::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::MissingText => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 呼び出し元へ返す固定メッセージ
    pub fn public_message(&self) -> &'static str {
        match self {
            ProxyError::MissingText => NO_TEXT_MESSAGE,
            _ => ANALYZE_FAILED_MESSAGE,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.public_message()))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;

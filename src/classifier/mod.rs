//! テキスト分類API連携
//!
//! 外部の分類モデルは `TextClassifier` の裏に隠す。
//! 本番は Hugging Face Inference API、テストでは記録用のフェイクを差し込む。

mod hugging_face;

pub use hugging_face::{HuggingFaceClassifier, HuggingFaceConfig};

use how_the_feels_common::EmotionScore;
use std::future::Future;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("通信エラー: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("分類APIがエラーを返しました (HTTP {status}): {body}")]
    Status { status: u16, body: String },

    #[error("分類結果のパースに失敗: {0}")]
    Parse(#[from] how_the_feels_common::Error),
}

/// テキストを感情ラベルに分類する外部サービス
pub trait TextClassifier: Send + Sync + 'static {
    /// `model` で `text` を分類し、確信度の高い順のスコア列を返す
    fn classify(
        &self,
        model: &str,
        text: &str,
    ) -> impl Future<Output = Result<Vec<EmotionScore>, ClassifierError>> + Send;
}

//! 感情解析の型定義
//!
//! プロキシとWeb(WASM)で共有される型:
//! - AnalyzeRequest: `/api/emotions` へのリクエストボディ
//! - EmotionScore: 分類結果の1件（ラベルと確信度）
//! - ErrorBody: エラー時のレスポンスボディ

use serde::{Deserialize, Serialize};

/// `/api/emotions` へのリクエスト
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

impl AnalyzeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// 分類結果の1件
///
/// 結果列は外部サービスの順位どおり（確信度の高い順）に並ぶ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub label: String,
    pub score: f64,
}

impl EmotionScore {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    /// スコアをパーセント表記（小数1桁）に変換
    ///
    /// ```
    /// use how_the_feels_common::EmotionScore;
    ///
    /// assert_eq!(EmotionScore::new("joy", 0.82).percent(), "82.0%");
    /// ```
    pub fn percent(&self) -> String {
        // 端数ちょうどは切り上げ（0.0625 -> "6.3%"）
        format!("{:.1}%", (self.score * 1000.0).round() / 10.0)
    }
}

/// エラーレスポンス `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

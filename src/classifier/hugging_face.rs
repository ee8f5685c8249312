//! Hugging Face Inference API クライアント

use super::{ClassifierError, TextClassifier};
use how_the_feels_common::{parse_classification_response, EmotionScore};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Hugging Face クライアント設定
#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    /// 例: "https://api-inference.huggingface.co"
    pub api_base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

/// 分類リクエスト
#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

pub struct HuggingFaceClassifier {
    client: Client,
    config: HuggingFaceConfig,
}

impl HuggingFaceClassifier {
    pub fn new(config: HuggingFaceConfig) -> Result<Self, ClassifierError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// モデルごとの推論エンドポイント
    pub fn model_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}",
            self.config.api_base_url.trim_end_matches('/'),
            model
        )
    }
}

impl TextClassifier for HuggingFaceClassifier {
    async fn classify(&self, model: &str, text: &str) -> Result<Vec<EmotionScore>, ClassifierError> {
        let url = self.model_url(model);
        debug!(%url, "Calling inference API");

        let mut request = self.client.post(&url).json(&InferenceRequest { inputs: text });
        // キー未設定でもそのまま送る（上流が拒否して500扱いになる）
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClassifierError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(parse_classification_response(&body)?)
    }
}

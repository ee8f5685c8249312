use crate::error::{ProxyError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 分類に使う固定モデル
pub const DEFAULT_MODEL: &str = "SamLowe/roberta-base-go_emotions";
pub const DEFAULT_API_BASE_URL: &str = "https://api-inference.huggingface.co";
/// 1リクエストあたりの処理時間上限（秒）
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

pub const API_KEY_ENV: &str = "HUGGINGFACE_API_KEY";
pub const MODEL_ENV: &str = "HOW_THE_FEELS_MODEL";
pub const API_BASE_ENV: &str = "HOW_THE_FEELS_API_BASE";
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base_url: String,
    pub timeout_seconds: u64,
    pub host: String,
    pub port: u16,
    pub static_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            api_base_url: DEFAULT_API_BASE_URL.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            host: "127.0.0.1".into(),
            port: 3000,
            static_dir: Some(PathBuf::from("web-wasm/dist")),
        }
    }
}

impl Config {
    /// 設定ファイル → 環境変数の順に読み込む
    pub fn load() -> Result<Self> {
        let config = Self::load_from(&Self::config_path()?)?;
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// 設定ファイルを読み込む（無ければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ProxyError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("how-the-feels").join("config.json"))
    }

    /// 環境変数で上書き（APIキーは環境変数を優先）
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(model) = lookup(MODEL_ENV).filter(|m| !m.trim().is_empty()) {
            self.model = model;
        }
        if let Some(base) = lookup(API_BASE_ENV).filter(|b| !b.trim().is_empty()) {
            self.api_base_url = base;
        }
        if let Some(port) = lookup(PORT_ENV) {
            self.port = port
                .trim()
                .parse()
                .map_err(|e| ProxyError::Config(format!("{}の値が不正です: {} ({})", PORT_ENV, port, e)))?;
        }
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn api_key_status(&self) -> &'static str {
        if self.api_key.is_some() {
            "設定済み"
        } else {
            "未設定"
        }
    }
}

//! HTTPサーバー
//!
//! ルートは `POST /api/emotions` のみ。静的ディレクトリが設定されていれば
//! それ以外のパスでWebクライアントを配信する。

use std::{path::Path, sync::Arc, time::Duration};

use axum::{
    body::Bytes,
    extract::State,
    routing::post,
    Json, Router,
};
use how_the_feels_common::{extract_text, EmotionScore};
use tokio::{net::TcpListener, signal};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{debug, error, info, warn};

use crate::classifier::{HuggingFaceClassifier, HuggingFaceConfig, TextClassifier};
use crate::config::Config;
use crate::error::{ProxyError, Result};

pub const EMOTIONS_ROUTE: &str = "/api/emotions";

/// リクエスト間で共有する読み取り専用の状態
pub struct AppState<C> {
    pub classifier: C,
    pub model: String,
    pub request_timeout: Duration,
}

impl<C: TextClassifier> AppState<C> {
    pub fn new(classifier: C, model: impl Into<String>, request_timeout: Duration) -> Arc<Self> {
        Arc::new(Self {
            classifier,
            model: model.into(),
            request_timeout,
        })
    }

    /// 1件のテキストを分類する（時間上限付き）
    pub async fn analyze(&self, text: &str) -> Result<Vec<EmotionScore>> {
        let classify = self.classifier.classify(&self.model, text);
        match tokio::time::timeout(self.request_timeout, classify).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(ProxyError::Timeout(self.request_timeout.as_secs())),
        }
    }
}

async fn analyze_emotions<C: TextClassifier>(
    State(state): State<Arc<AppState<C>>>,
    body: Bytes,
) -> Result<Json<Vec<EmotionScore>>> {
    let text = extract_text(&body).map_err(|e| {
        error!("Error during emotion analysis: {e}");
        ProxyError::from(e)
    })?;
    let Some(text) = text else {
        warn!("Rejected request without text");
        return Err(ProxyError::MissingText);
    };

    debug!(chars = text.chars().count(), model = %state.model, "Analyzing text");

    match state.analyze(&text).await {
        Ok(scores) => {
            info!(
                results = scores.len(),
                top = scores.first().map(|s| s.label.as_str()).unwrap_or("-"),
                "Emotion analysis complete"
            );
            Ok(Json(scores))
        }
        Err(e) => {
            error!("Error during emotion analysis: {e}");
            Err(e)
        }
    }
}

pub fn build_router<C: TextClassifier>(state: Arc<AppState<C>>, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route(EMOTIONS_ROUTE, post(analyze_emotions::<C>))
        .with_state(state);

    let router = match static_dir {
        Some(dir) if dir.is_dir() => {
            info!("Serving web client from {}", dir.display());
            router.fallback_service(ServeDir::new(dir))
        }
        Some(dir) => {
            warn!("Static directory {} not found, serving API only", dir.display());
            router
        }
        None => router,
    };

    router.layer(TraceLayer::new_for_http())
}

/// 設定からサーバーを組み立てて起動
pub async fn run(config: Config) -> Result<()> {
    if config.api_key.is_none() {
        warn!("HUGGINGFACE_API_KEY is not set; analysis requests will fail");
    }

    let classifier = HuggingFaceClassifier::new(HuggingFaceConfig {
        api_base_url: config.api_base_url.clone(),
        api_key: config.api_key.clone(),
        timeout: config.timeout(),
    })?;
    let state = AppState::new(classifier, config.model.clone(), config.timeout());
    let app = build_router(state, config.static_dir.as_deref());

    let address = config.bind_address();
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

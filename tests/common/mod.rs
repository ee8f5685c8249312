//! 統合テスト用ヘルパー

#![allow(dead_code)]

use axum::Router;
use how_the_feels::classifier::{ClassifierError, TextClassifier};
use how_the_feels_common::EmotionScore;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// フェイク分類器の振る舞い
#[derive(Clone)]
pub enum Outcome {
    Scores(Vec<EmotionScore>),
    Fail { status: u16, body: String },
    Hang,
}

/// 呼び出しを記録するフェイク分類器
#[derive(Clone)]
pub struct RecordingClassifier {
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    outcome: Outcome,
}

impl RecordingClassifier {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            outcome,
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl TextClassifier for RecordingClassifier {
    async fn classify(&self, model: &str, text: &str) -> Result<Vec<EmotionScore>, ClassifierError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), text.to_string()));

        match &self.outcome {
            Outcome::Scores(scores) => Ok(scores.clone()),
            Outcome::Fail { status, body } => Err(ClassifierError::Status {
                status: *status,
                body: body.clone(),
            }),
            Outcome::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(vec![])
            }
        }
    }
}

/// ルーターをローカルの空きポートで起動し、ベースURLを返す
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("local_addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server failed");
    });
    format!("http://{}", addr)
}

pub fn joy_scores() -> Vec<EmotionScore> {
    vec![
        EmotionScore::new("joy", 0.82),
        EmotionScore::new("neutral", 0.10),
        EmotionScore::new("optimism", 0.05),
    ]
}

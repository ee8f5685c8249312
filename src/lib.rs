//! HowTheFeels プロキシサーバー
//!
//! `POST /api/emotions` で受け取ったテキストを外部の感情分類モデルへ中継し、
//! 結果をそのままJSONで返す。ビルド済みのWebクライアントも配信する。

pub mod cli;
pub mod config;
pub mod error;
pub mod classifier;
pub mod server;

//! HowTheFeels Common Library
//!
//! プロキシサーバーとWeb(WASM)クライアントで共有される型とロジック

pub mod types;
pub mod theme;
pub mod parser;
pub mod session;
pub mod rain;
pub mod error;

pub use types::{AnalyzeRequest, EmotionScore, ErrorBody};
pub use theme::{all_emojis, theme_for, EmotionTheme, DEFAULT_EMOTION, EMOTION_THEMES};
pub use parser::{extract_text, parse_classification_response};
pub use session::{AnalysisSession, EmotionBar, FetchError, KeyAction};
pub use rain::{RainPool, RandomSource};
pub use error::{Error, Result};

//! 画面セッション状態
//!
//! 入力テキスト・解析結果・ローディング・エラーの4つを保持し、
//! 送信開始/応答受信のイベントでのみ更新する。
//! Web側はこの状態をシグナルに包んで描画する。

use crate::theme::{theme_for, EmotionTheme, DEFAULT_EMOTION};
use crate::types::{AnalyzeRequest, EmotionScore};

/// 解析失敗時にユーザーへ表示する文言
pub const FETCH_ERROR_MESSAGE: &str = "Failed to analyze emotions. Please try again.";

/// 結果なしの時のボタン背景
pub const RAINBOW_GRADIENT: &str =
    "linear-gradient(45deg, #FF0000, #FF7F00, #FFFF00, #00FF00, #0000FF, #4B0082, #8B00FF)";

const EMPTY_BACKGROUND: &str = "#FFFFFF";
const EMPTY_BORDER_COLOR: &str = "#000";

/// クライアント側の取得エラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// プロキシが非2xxを返した
    Status(u16),
    /// 通信失敗・レスポンス解釈失敗
    Network(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Status(code) => write!(f, "HTTP {}", code),
            FetchError::Network(msg) => write!(f, "{}", msg),
        }
    }
}

/// テキストエリアのキー入力の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// フォーム送信（既定動作は抑止する）
    Submit,
    /// ブラウザの既定動作に任せる（Shift+Enterなら改行）
    PassThrough,
}

impl KeyAction {
    /// 改行になる修飾キーはShiftのみ。Ctrl/Alt/Meta+Enterは送信扱い
    pub fn from_key(key: &str, shift: bool) -> Self {
        if key == "Enter" && !shift {
            KeyAction::Submit
        } else {
            KeyAction::PassThrough
        }
    }
}

/// 結果カード1枚分の表示データ
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionBar {
    pub label: String,
    pub emoji: &'static str,
    pub color: &'static str,
    pub gradient: String,
    /// 表示用 "82.0%"
    pub percent: String,
}

impl EmotionBar {
    fn from_score(score: &EmotionScore) -> Self {
        let theme = theme_for(&score.label);
        Self {
            label: score.label.clone(),
            emoji: theme.emoji,
            color: theme.color,
            gradient: theme.bar_gradient(),
            percent: score.percent(),
        }
    }

    /// バーの幅（CSS）
    pub fn width(&self) -> &str {
        &self.percent
    }
}

/// 1画面分のセッション状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisSession {
    pub text: String,
    pub emotions: Vec<EmotionScore>,
    pub loading: bool,
    pub error: String,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// 送信開始
    ///
    /// 解析中、またはテキストが空の場合は None（送信しない）。
    /// それ以外はローディングを立ててエラーを消し、リクエストを返す。
    pub fn begin_submit(&mut self) -> Option<AnalyzeRequest> {
        if self.loading || self.text.is_empty() {
            return None;
        }
        self.loading = true;
        self.error.clear();
        Some(AnalyzeRequest::new(self.text.clone()))
    }

    /// 応答受信
    ///
    /// 成功時は結果を置き換え、失敗時は固定メッセージを設定して前回の結果を残す。
    /// どちらの場合もローディングは必ず解除する。
    pub fn finish(&mut self, outcome: Result<Vec<EmotionScore>, FetchError>) {
        match outcome {
            Ok(emotions) => self.emotions = emotions,
            Err(_) => self.error = FETCH_ERROR_MESSAGE.to_string(),
        }
        self.loading = false;
    }

    pub fn has_results(&self) -> bool {
        !self.emotions.is_empty()
    }

    /// 最上位の感情ラベル（結果なしなら neutral）
    pub fn top_label(&self) -> &str {
        self.emotions
            .first()
            .map(|e| e.label.as_str())
            .unwrap_or(DEFAULT_EMOTION)
    }

    pub fn theme(&self) -> &'static EmotionTheme {
        theme_for(self.top_label())
    }

    /// ページ背景
    pub fn background(&self) -> String {
        if self.has_results() {
            self.theme().gradient()
        } else {
            EMPTY_BACKGROUND.to_string()
        }
    }

    pub fn input_border_color(&self) -> &'static str {
        if self.has_results() {
            self.theme().color
        } else {
            EMPTY_BORDER_COLOR
        }
    }

    pub fn button_background(&self) -> String {
        if self.has_results() {
            self.theme().gradient()
        } else {
            RAINBOW_GRADIENT.to_string()
        }
    }

    pub fn button_label(&self) -> String {
        if self.loading {
            "Analyzing...".to_string()
        } else {
            format!("Analyze Emotions {}", self.theme().emoji)
        }
    }

    /// 結果カード（受信順）
    pub fn bars(&self) -> Vec<EmotionBar> {
        self.emotions.iter().map(EmotionBar::from_score).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(emotions: Vec<EmotionScore>) -> AnalysisSession {
        AnalysisSession {
            emotions,
            ..Default::default()
        }
    }

    #[test]
    fn test_top_emotion_joy() {
        let session = session_with(vec![
            EmotionScore::new("joy", 0.82),
            EmotionScore::new("neutral", 0.10),
            EmotionScore::new("optimism", 0.05),
        ]);
        assert_eq!(session.top_label(), "joy");
        assert_eq!(session.theme().label, "joy");
        let bars = session.bars();
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].width(), "82.0%");
        assert_eq!(bars[1].percent, "10.0%");
    }

    #[test]
    fn test_anger_background() {
        let session = session_with(vec![EmotionScore::new("anger", 0.55)]);
        assert_eq!(session.background(), "linear-gradient(135deg, #FF4500, #8B0000)");
        assert_eq!(session.bars()[0].width(), "55.0%");
        assert_eq!(session.input_border_color(), "#FF4500");
    }

    #[test]
    fn test_empty_results_render_neutral() {
        let session = AnalysisSession::new();
        assert_eq!(session.top_label(), "neutral");
        assert_eq!(session.theme().emoji, "😐");
        assert!(session.bars().is_empty());
        assert_eq!(session.background(), "#FFFFFF");
        assert_eq!(session.button_background(), RAINBOW_GRADIENT);
        assert_eq!(session.button_label(), "Analyze Emotions 😐");
    }

    #[test]
    fn test_top_emotion_is_not_resorted() {
        // サービス側の順位を信頼する
        let session = session_with(vec![
            EmotionScore::new("sadness", 0.2),
            EmotionScore::new("joy", 0.7),
        ]);
        assert_eq!(session.top_label(), "sadness");
    }

    #[test]
    fn test_unknown_label_uses_neutral_theme() {
        let session = session_with(vec![EmotionScore::new("ennui", 0.9)]);
        assert_eq!(session.top_label(), "ennui");
        assert_eq!(session.theme().label, "neutral");
        assert_eq!(session.bars()[0].emoji, "😐");
        assert_eq!(session.bars()[0].label, "ennui");
    }

    #[test]
    fn test_begin_submit_sets_loading_and_clears_error() {
        let mut session = AnalysisSession::new();
        session.set_text("what a day");
        session.error = FETCH_ERROR_MESSAGE.to_string();

        let request = session.begin_submit().expect("送信されるべき");
        assert_eq!(request.text, "what a day");
        assert!(session.loading);
        assert!(session.error.is_empty());
        assert_eq!(session.button_label(), "Analyzing...");
    }

    #[test]
    fn test_begin_submit_while_loading_is_rejected() {
        let mut session = AnalysisSession::new();
        session.set_text("first");
        assert!(session.begin_submit().is_some());
        assert!(session.begin_submit().is_none());
        assert!(session.loading);
    }

    #[test]
    fn test_begin_submit_empty_text_is_rejected() {
        let mut session = AnalysisSession::new();
        assert!(session.begin_submit().is_none());
        assert!(!session.loading);
    }

    #[test]
    fn test_finish_success_replaces_results() {
        let mut session = session_with(vec![EmotionScore::new("fear", 0.4)]);
        session.set_text("yay");
        session.begin_submit();
        session.finish(Ok(vec![EmotionScore::new("joy", 0.9)]));

        assert!(!session.loading);
        assert!(session.error.is_empty());
        assert_eq!(session.top_label(), "joy");
    }

    #[test]
    fn test_finish_failure_keeps_previous_results() {
        let mut session = session_with(vec![EmotionScore::new("fear", 0.4)]);
        session.set_text("hmm");
        session.begin_submit();
        session.finish(Err(FetchError::Status(500)));

        assert!(!session.loading);
        assert_eq!(session.error, FETCH_ERROR_MESSAGE);
        assert_eq!(session.emotions, vec![EmotionScore::new("fear", 0.4)]);
    }

    #[test]
    fn test_finish_network_error_clears_loading() {
        let mut session = AnalysisSession::new();
        session.set_text("hello");
        session.begin_submit();
        session.finish(Err(FetchError::Network("connection refused".into())));
        assert!(!session.loading);
        assert_eq!(session.error, FETCH_ERROR_MESSAGE);
        // 再送信できる
        assert!(session.begin_submit().is_some());
    }

    #[test]
    fn test_key_action() {
        assert_eq!(KeyAction::from_key("Enter", false), KeyAction::Submit);
        assert_eq!(KeyAction::from_key("Enter", true), KeyAction::PassThrough);
        assert_eq!(KeyAction::from_key("a", false), KeyAction::PassThrough);
        assert_eq!(KeyAction::from_key("Tab", false), KeyAction::PassThrough);
    }

    #[test]
    fn test_only_shift_is_newline_modifier() {
        // Ctrl/Alt/Meta は from_key に渡らないので、押していても Shift なしなら送信
        assert_eq!(KeyAction::from_key("Enter", false), KeyAction::Submit);
        assert_eq!(KeyAction::from_key("Enter", true), KeyAction::PassThrough);
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::Status(500).to_string(), "HTTP 500");
        assert_eq!(FetchError::Network("offline".into()).to_string(), "offline");
    }
}

//! 感情テーマ定義
//!
//! go_emotions の28ラベルそれぞれに配色・絵文字・ムードを割り当てる。
//! テーブルは静的で、実行中に変更されない。

/// 感情ごとの表示テーマ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionTheme {
    pub label: &'static str,
    pub color: &'static str,
    pub dark_color: &'static str,
    pub emoji: &'static str,
    pub mood: &'static str,
}

impl EmotionTheme {
    const fn new(
        label: &'static str,
        color: &'static str,
        dark_color: &'static str,
        emoji: &'static str,
        mood: &'static str,
    ) -> Self {
        Self {
            label,
            color,
            dark_color,
            emoji,
            mood,
        }
    }

    /// 背景用の斜めグラデーション
    pub fn gradient(&self) -> String {
        format!("linear-gradient(135deg, {}, {})", self.color, self.dark_color)
    }

    /// 結果バー用の横グラデーション
    pub fn bar_gradient(&self) -> String {
        format!("linear-gradient(90deg, {}, {})", self.color, self.dark_color)
    }
}

/// 結果が空の場合や未知のラベルに使うテーマ
pub const DEFAULT_EMOTION: &str = "neutral";

pub const EMOTION_THEMES: [EmotionTheme; 28] = [
    EmotionTheme::new("admiration", "#FFD700", "#B8860B", "🌟", "admiring"),
    EmotionTheme::new("amusement", "#FF69B4", "#C71585", "😄", "amused"),
    EmotionTheme::new("anger", "#FF4500", "#8B0000", "😠", "angry"),
    EmotionTheme::new("annoyance", "#FF6347", "#CD5C5C", "😤", "annoyed"),
    EmotionTheme::new("approval", "#32CD32", "#228B22", "👍", "approving"),
    EmotionTheme::new("caring", "#FF69B4", "#DB7093", "🤗", "caring"),
    EmotionTheme::new("confusion", "#9370DB", "#483D8B", "😕", "confused"),
    EmotionTheme::new("curiosity", "#40E0D0", "#008B8B", "🤔", "curious"),
    EmotionTheme::new("desire", "#FF1493", "#C71585", "😍", "desiring"),
    EmotionTheme::new("disappointment", "#778899", "#4A5D75", "😞", "disappointed"),
    EmotionTheme::new("disapproval", "#DC143C", "#8B0000", "👎", "disapproving"),
    EmotionTheme::new("disgust", "#8B4513", "#654321", "🤢", "disgusted"),
    EmotionTheme::new("embarrassment", "#DDA0DD", "#9932CC", "😳", "embarrassed"),
    EmotionTheme::new("excitement", "#FF4500", "#FF0000", "🎉", "excited"),
    EmotionTheme::new("fear", "#4B0082", "#191970", "😨", "scared"),
    EmotionTheme::new("gratitude", "#FFD700", "#DAA520", "🙏", "grateful"),
    EmotionTheme::new("grief", "#4682B4", "#000080", "😢", "grieving"),
    EmotionTheme::new("joy", "#FFD700", "#FFA500", "😊", "joyful"),
    EmotionTheme::new("love", "#FF69B4", "#FF1493", "❤️", "loving"),
    EmotionTheme::new("nervousness", "#E6E6FA", "#9370DB", "😰", "nervous"),
    EmotionTheme::new("optimism", "#FFD700", "#FFA500", "🌈", "optimistic"),
    EmotionTheme::new("pride", "#9370DB", "#4B0082", "🦚", "proud"),
    EmotionTheme::new("realization", "#40E0D0", "#20B2AA", "💡", "enlightened"),
    EmotionTheme::new("relief", "#98FB98", "#3CB371", "😌", "relieved"),
    EmotionTheme::new("remorse", "#4682B4", "#000080", "😔", "remorseful"),
    EmotionTheme::new("sadness", "#4682B4", "#000080", "😢", "sad"),
    EmotionTheme::new("surprise", "#FF69B4", "#FF1493", "😲", "surprised"),
    EmotionTheme::new("neutral", "#808080", "#696969", "😐", "neutral"),
];

/// ラベルに対応するテーマを検索（完全一致）
pub fn lookup(label: &str) -> Option<&'static EmotionTheme> {
    EMOTION_THEMES.iter().find(|t| t.label == label)
}

/// ラベルに対応するテーマを返す
///
/// テーブルにないラベルは neutral にフォールバックする
pub fn theme_for(label: &str) -> &'static EmotionTheme {
    lookup(label).unwrap_or_else(default_theme)
}

pub fn default_theme() -> &'static EmotionTheme {
    // テーブル末尾が neutral
    &EMOTION_THEMES[EMOTION_THEMES.len() - 1]
}

/// 全テーマの絵文字（テーブル順、重複あり）
pub fn all_emojis() -> Vec<&'static str> {
    EMOTION_THEMES.iter().map(|t| t.emoji).collect()
}

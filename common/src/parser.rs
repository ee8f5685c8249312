//! レスポンス/リクエストパーサー
//!
//! 外部分類APIのレスポンスを EmotionScore 列に正規化し、
//! クライアントからのリクエストボディからテキストを取り出す

use crate::error::{Error, Result};
use crate::types::EmotionScore;
use serde::Deserialize;
use serde_json::Value;

/// 分類APIのレスポンス形状
///
/// 入力1件につき1リストを返す入れ子形式と、平坦なリストの両方がある
#[derive(Deserialize)]
#[serde(untagged)]
enum ClassificationPayload {
    Nested(Vec<Vec<EmotionScore>>),
    Flat(Vec<EmotionScore>),
}

/// 分類APIのレスポンスをパース
///
/// 入れ子形式の場合は先頭のリストを採用する。順序は変更しない。
///
/// # Examples
/// ```
/// use how_the_feels_common::parse_classification_response;
///
/// let body = r#"[[{"label":"joy","score":0.9},{"label":"neutral","score":0.1}]]"#;
/// let scores = parse_classification_response(body).unwrap();
/// assert_eq!(scores[0].label, "joy");
/// ```
pub fn parse_classification_response(body: &str) -> Result<Vec<EmotionScore>> {
    let payload: ClassificationPayload = serde_json::from_str(body).map_err(|e| {
        Error::Parse(format!("分類結果の形式が不正です: {}", e))
    })?;

    let scores = match payload {
        ClassificationPayload::Nested(lists) => lists.into_iter().next().unwrap_or_default(),
        ClassificationPayload::Flat(scores) => scores,
    };

    Ok(scores)
}

/// リクエストボディから `text` を取り出す
///
/// JSONとして読めない場合は `Error::Json`。
/// オブジェクトでない、`text` が無い・文字列でない・空文字の場合は `Ok(None)`
pub fn extract_text(body: &[u8]) -> Result<Option<String>> {
    let value: Value = serde_json::from_slice(body)?;
    let text = match value.get("text") {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        _ => None,
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_keeps_order() {
        let body = r#"[[{"label":"anger","score":0.55},{"label":"annoyance","score":0.3},{"label":"neutral","score":0.15}]]"#;
        let scores = parse_classification_response(body).unwrap();
        let labels: Vec<_> = scores.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["anger", "annoyance", "neutral"]);
    }

    #[test]
    fn test_parse_flat() {
        let body = r#"[{"label":"joy","score":0.82},{"label":"neutral","score":0.10}]"#;
        let scores = parse_classification_response(body).unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[1], EmotionScore::new("neutral", 0.10));
    }

    #[test]
    fn test_parse_empty_variants() {
        assert!(parse_classification_response("[]").unwrap().is_empty());
        assert!(parse_classification_response("[[]]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_error_object() {
        let body = r#"{"error":"Model is currently loading","estimated_time":20.0}"#;
        let err = parse_classification_response(body).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_extract_text() {
        assert_eq!(extract_text(br#"{"text":"hello"}"#).unwrap(), Some("hello".to_string()));
        assert_eq!(extract_text(br#"{"text":"  "}"#).unwrap(), Some("  ".to_string()));
    }

    #[test]
    fn test_extract_text_missing_or_empty() {
        assert_eq!(extract_text(br#"{"text":""}"#).unwrap(), None);
        assert_eq!(extract_text(br#"{}"#).unwrap(), None);
        assert_eq!(extract_text(br#"{"text":null}"#).unwrap(), None);
        assert_eq!(extract_text(br#"{"text":42}"#).unwrap(), None);
        assert_eq!(extract_text(br#"["text"]"#).unwrap(), None);
    }

    #[test]
    fn test_extract_text_malformed_json() {
        // 読めないボディは「テキストなし」ではなくJSONエラー
        for body in [&b"not json"[..], b"{ broken", b""] {
            let err = extract_text(body).unwrap_err();
            assert!(matches!(err, Error::Json(_)));
        }
    }
}

//! プロキシ `/api/emotions` 呼び出し

use how_the_feels_common::{AnalyzeRequest, EmotionScore, FetchError};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const EMOTIONS_ENDPOINT: &str = "/api/emotions";

fn js_error(value: JsValue) -> FetchError {
    FetchError::Network(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// テキストを送信し、感情スコア列を受け取る
///
/// 非2xxは `FetchError::Status`、通信やJSONの失敗は `FetchError::Network`
pub async fn analyze_emotions(request: &AnalyzeRequest) -> Result<Vec<EmotionScore>, FetchError> {
    let body = serde_json::to_string(request)
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(EMOTIONS_ENDPOINT, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window()
        .ok_or_else(|| FetchError::Network("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;

    serde_wasm_bindgen::from_value(json).map_err(|e| FetchError::Network(e.to_string()))
}

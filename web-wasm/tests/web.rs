//! ブラウザ乱数を使った状態ロジックのテスト（wasm-pack test）

#![cfg(target_arch = "wasm32")]

use how_the_feels_common::rain::{RainPool, MAX_DROPS};
use how_the_feels_common::{AnalysisSession, EmotionScore, FetchError};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn rain_pool_with_math_random_stays_bounded() {
    let mut pool = RainPool::seeded(&mut js_sys::Math::random);
    for _ in 0..100 {
        pool.tick(&mut js_sys::Math::random);
        assert!(pool.len() <= MAX_DROPS);
    }
}

#[wasm_bindgen_test]
fn session_round_trip_renders_theme() {
    let mut session = AnalysisSession::new();
    session.set_text("I can't believe this happened");
    assert!(session.begin_submit().is_some());

    session.finish(Ok(vec![EmotionScore::new("anger", 0.55)]));
    assert_eq!(session.background(), "linear-gradient(135deg, #FF4500, #8B0000)");
    assert_eq!(session.bars()[0].width(), "55.0%");

    session.set_text("again");
    session.begin_submit();
    session.finish(Err(FetchError::Status(500)));
    assert!(!session.loading);
    assert_eq!(session.top_label(), "anger");
}

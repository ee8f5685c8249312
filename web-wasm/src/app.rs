//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use how_the_feels_common::AnalysisSession;

use crate::api::emotions::analyze_emotions;
use crate::components::{
    emoji_rain::EmojiRain,
    emotion_form::EmotionForm,
    emotion_results::EmotionResults,
    error_banner::ErrorBanner,
    header::Header,
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 画面全体の状態（1セッション分）
    let session = RwSignal::new(AnalysisSession::new());

    // 送信ハンドラ
    let on_submit = move |_: ()| {
        let mut request = None;
        session.update(|s| request = s.begin_submit());
        // 解析中・空テキストは送らない
        let Some(request) = request else {
            return;
        };

        spawn_local(async move {
            let outcome = analyze_emotions(&request).await;
            if let Err(e) = &outcome {
                gloo::console::error!("Error:", e.to_string());
            }
            session.update(|s| s.finish(outcome));
        });
    };

    let emoji = Signal::derive(move || session.with(|s| s.theme().emoji));
    let error = Signal::derive(move || session.with(|s| s.error.clone()));

    view! {
        <div
            class="page"
            style=move || format!("background: {};", session.with(|s| s.background()))
        >
            <EmojiRain />

            <div class="page-content">
                <main class="container">
                    <Header emoji=emoji />
                    <EmotionForm session=session on_submit=on_submit />
                    <ErrorBanner error=error />
                    <EmotionResults session=session />
                </main>
            </div>
        </div>
    }
}

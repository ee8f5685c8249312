//! 解析結果コンポーネント

use leptos::prelude::*;
use how_the_feels_common::{AnalysisSession, EmotionBar};

#[component]
pub fn EmotionResults(session: RwSignal<AnalysisSession>) -> impl IntoView {
    let top_label = move || session.with(|s| s.top_label().to_string());
    let top_emoji = move || session.with(|s| s.theme().emoji);
    let top_color = move || session.with(|s| format!("color: {};", s.theme().color));

    view! {
        <Show when=move || session.with(|s| s.has_results())>
            <div class="results">
                <h2 class="top-emotion">
                    <span style=top_color>{top_emoji}</span>
                    <span>{top_label}</span>
                    <span style=top_color>{top_emoji}</span>
                </h2>

                <div class="result-grid">
                    <For
                        each=move || session.with(|s| s.bars())
                        key=|bar| (bar.label.clone(), bar.percent.clone())
                        children=|bar| view! { <EmotionCard bar=bar /> }
                    />
                </div>
            </div>
        </Show>
    }
}

#[component]
fn EmotionCard(bar: EmotionBar) -> impl IntoView {
    view! {
        <div class="result-card" style=format!("border-left: 4px solid {};", bar.color)>
            <div class="result-row">
                <div class="result-label">
                    <span>{bar.emoji}</span>
                    <span class="label-text">{bar.label.clone()}</span>
                </div>
                <span class="result-score">{bar.percent.clone()}</span>
            </div>
            <div
                class="result-bar"
                style=format!("width: {}; background: {};", bar.width(), bar.gradient)
            />
        </div>
    }
}

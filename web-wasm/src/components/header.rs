//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header(emoji: Signal<&'static str>) -> impl IntoView {
    view! {
        <header class="header">
            <h1 class="title rainbow-text">"HowTheFeels"</h1>
            <span class="header-emoji">{move || emoji.get()}</span>
        </header>
    }
}

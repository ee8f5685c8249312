//! エラー表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(error: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !error.get().is_empty()>
            <div class="error-banner">{move || error.get()}</div>
        </Show>
    }
}

//! テキスト入力フォームコンポーネント

use leptos::ev::{KeyboardEvent, SubmitEvent};
use leptos::prelude::*;
use how_the_feels_common::{AnalysisSession, KeyAction};

#[component]
pub fn EmotionForm<F>(
    session: RwSignal<AnalysisSession>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send,
{
    let on_form_submit = {
        let on_submit = on_submit.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            on_submit(());
        }
    };

    // Enter で送信、Shift+Enter は改行
    let on_keydown = {
        let on_submit = on_submit.clone();
        move |ev: KeyboardEvent| {
            if KeyAction::from_key(&ev.key(), ev.shift_key()) == KeyAction::Submit {
                ev.prevent_default();
                on_submit(());
            }
        }
    };

    view! {
        <form class="emotion-form" on:submit=on_form_submit>
            <textarea
                class="emotion-input"
                placeholder="Enter your text to analyze emotions... (Press Enter to analyze, Shift+Enter for new line)"
                required=true
                style=move || format!("border-color: {};", session.with(|s| s.input_border_color()))
                prop:value=move || session.with(|s| s.text.clone())
                on:input=move |ev| {
                    session.update(|s| s.set_text(event_target_value(&ev)));
                }
                on:keydown=on_keydown
            />

            <button
                type="submit"
                class="analyze-button"
                class:rainbow-button=move || session.with(|s| !s.has_results())
                disabled=move || session.with(|s| s.loading)
                style=move || format!("background: {};", session.with(|s| s.button_background()))
            >
                {move || session.with(|s| s.button_label())}
            </button>
        </form>
    }
}

//! 絵文字レイン（背景装飾）コンポーネント

use std::time::Duration;

use leptos::prelude::*;
use how_the_feels_common::rain::{RainPool, TICK_INTERVAL_MS};

#[component]
pub fn EmojiRain() -> impl IntoView {
    let pool = RwSignal::new(RainPool::seeded(&mut js_sys::Math::random));

    // 解析状態とは無関係に一定間隔で追加
    match set_interval_with_handle(
        move || pool.update(|p| p.tick(&mut js_sys::Math::random)),
        Duration::from_millis(TICK_INTERVAL_MS as u64),
    ) {
        Ok(handle) => {
            on_cleanup(move || handle.clear());
        }
        Err(e) => {
            gloo::console::error!("Failed to start emoji rain:", e);
        }
    }

    view! {
        <div class="emoji-rain">
            <For
                each=move || pool.with(|p| p.to_vec())
                key=|drop| drop.id
                children=|drop| view! {
                    <div class="raindrop" style=drop.style()>{drop.emoji}</div>
                }
            />
        </div>
    }
}

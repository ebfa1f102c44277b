//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Workout Technique Assessment"</h1>
            <p class="text-muted">"Upload a workout video and get a technique score with feedback"</p>
        </header>
    }
}

//! 送信ボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn SubmitButton<F>(
    can_submit: Signal<bool>,
    is_submitting: Signal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <div class="submit-bar">
            <button
                class="btn btn-primary"
                disabled=move || !can_submit.get()
                on:click={
                    let on_submit = on_submit.clone();
                    move |_| on_submit(())
                }
            >
                {move || if is_submitting.get() { "Processing..." } else { "Assess Technique" }}
            </button>
            <Show when=move || is_submitting.get()>
                <div class="progress-container">
                    <div class="progress-bar indeterminate">
                        <div class="progress-fill" />
                    </div>
                    <p class="progress-text">"Uploading and analysing your video..."</p>
                </div>
            </Show>
        </div>
    }
}

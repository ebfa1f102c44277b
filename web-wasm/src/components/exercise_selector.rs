//! 種目セレクタコンポーネント

use leptos::prelude::*;
use workout_assess_common::{ExerciseType, EXERCISES};

#[component]
pub fn ExerciseSelector<F>(
    selected: Signal<ExerciseType>,
    /// 送信中は変更不可
    disabled: Signal<bool>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(ExerciseType) + 'static + Clone,
{
    view! {
        <div class="exercise-selector">
            <label>"Exercise type"</label>
            <div class="exercise-options">
                {EXERCISES
                    .iter()
                    .map(|info| {
                        let kind = info.kind;
                        let on_select = on_select.clone();
                        view! {
                            <button
                                type="button"
                                class="exercise-option"
                                class:selected=move || selected.get() == kind
                                disabled=move || disabled.get()
                                on:click=move |_| on_select(kind)
                            >
                                <span class="exercise-icon">{info.icon}</span>
                                <span class="exercise-label">{info.label}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

//! 評価結果オーバーレイ

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::MouseEvent;
use workout_assess_common::{format_score, AnimationStep, ReceivedResult, ScoreAnimator};

use crate::components::score_ring::ScoreRing;

#[component]
pub fn ResultOverlay<F>(
    #[prop(into)] result: Signal<Option<ReceivedResult>>,
    on_close: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let (displayed, set_displayed) = signal(0.0f64);
    let animator = StoredValue::new(ScoreAnimator::new());
    // 保持するタイマーは常に1つ（差し替え・破棄でキャンセルされる）
    let timer = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let current = result.get();
        let step = animator
            .try_update_value(|a| a.observe(current.as_ref()))
            .unwrap_or(AnimationStep::Unchanged);

        match step {
            AnimationStep::Start { submission, delay_ms } => {
                set_displayed.set(0.0);
                let tick = Timeout::new(delay_ms, move || {
                    if let Some(Some(score)) = animator.try_update_value(|a| a.tick(submission)) {
                        set_displayed.set(score);
                    }
                });
                timer.set_value(Some(tick));
            }
            AnimationStep::Cleared => {
                timer.set_value(None);
                set_displayed.set(0.0);
            }
            AnimationStep::Unchanged => {}
        }
    });

    on_cleanup(move || timer.dispose());

    move || {
        result.get().map(|received| {
            let on_close_backdrop = on_close.clone();
            let on_close_button = on_close.clone();
            let r = received.result;
            let band = r.band().as_str();

            view! {
                <div class="result-backdrop" on:click=move |_| on_close_backdrop(())>
                    <div class="result-card" on:click=|ev: MouseEvent| ev.stop_propagation()>
                        <div class="result-header">
                            <h2>"Assessment Result"</h2>
                            <button
                                type="button"
                                class="result-close"
                                on:click=move |_| on_close_button(())
                            >
                                "✕"
                            </button>
                        </div>

                        <ScoreRing value=displayed label=format_score(r.score) band=band />

                        <div class="sub-scores">
                            <div class="sub-score">
                                <span class="sub-score-label">"Frame Score"</span>
                                <span class="sub-score-value">{format_score(r.frame_score)}</span>
                            </div>
                            <div class="sub-score">
                                <span class="sub-score-label">"Phase Score"</span>
                                <span class="sub-score-value">{format_score(r.phase_score)}</span>
                            </div>
                        </div>

                        <h3>"Feedback"</h3>
                        {if r.feedback.is_empty() {
                            view! { <p class="text-muted">"No feedback for this attempt."</p> }.into_any()
                        } else {
                            view! {
                                <ol class="feedback-list">
                                    {r.feedback
                                        .into_iter()
                                        .map(|line| view! { <li>{line}</li> })
                                        .collect_view()}
                                </ol>
                            }
                                .into_any()
                        }}
                    </div>
                </div>
            }
        })
    }
}

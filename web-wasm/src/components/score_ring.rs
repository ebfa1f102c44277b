//! スコアリングコンポーネント（円形プログレス）

use leptos::prelude::*;
use workout_assess_common::{animation::ring_circumference, ring_dash_offset, RING_RADIUS};

#[component]
pub fn ScoreRing(
    /// 現在の表示値（0〜100、アニメーション対象）
    value: ReadSignal<f64>,
    /// 中央に表示する最終スコア
    label: String,
    band: &'static str,
) -> impl IntoView {
    let size = (RING_RADIUS + 8.0) * 2.0;
    let center = (size / 2.0).to_string();
    let radius = RING_RADIUS.to_string();
    let circumference = ring_circumference(RING_RADIUS).to_string();
    let rotate = format!("rotate(-90 {} {})", center, center);

    view! {
        <div class=format!("score-ring {}", band)>
            <svg width=size.to_string() height=size.to_string() viewBox=format!("0 0 {} {}", size, size)>
                <circle
                    class="score-ring-track"
                    cx=center.clone()
                    cy=center.clone()
                    r=radius.clone()
                    fill="none"
                    stroke-width="10"
                />
                <circle
                    class="score-ring-fill"
                    cx=center.clone()
                    cy=center
                    r=radius
                    fill="none"
                    stroke-width="10"
                    stroke-linecap="round"
                    stroke-dasharray=circumference
                    stroke-dashoffset=move || ring_dash_offset(value.get(), RING_RADIUS).to_string()
                    transform=rotate
                />
            </svg>
            <div class="score-ring-label">
                <span class="score-value">{label}</span>
                <span class="score-unit">"/ 100"</span>
            </div>
        </div>
    }
}

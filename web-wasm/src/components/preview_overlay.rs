//! 動画プレビューオーバーレイ
//!
//! 選択中の動画をドラッグで移動できるパネルに表示する。
//! ポインタ移動・解放はウィンドウ全体で監視し、パネル外に出てもドラッグを続ける。
//! リスナーとObject URLはこのコンポーネントが破棄されると解放される。

use gloo::events::EventListener;
use gloo::file::ObjectUrl;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, MouseEvent, PointerEvent};
use workout_assess_common::{Point, PreviewOverlay};

/// ウィンドウに登録したドラッグ用リスナー（drop で解除）
struct DragListeners {
    _pointer_move: EventListener,
    _pointer_up: EventListener,
}

impl DragListeners {
    fn install(state: RwSignal<PreviewOverlay>) -> Option<Self> {
        let window = web_sys::window()?;

        let pointer_move = EventListener::new(&window, "pointermove", move |event| {
            if !state.with_untracked(|o| o.is_dragging()) {
                return;
            }
            if let Some(ev) = event.dyn_ref::<MouseEvent>() {
                let pointer = pointer_of(ev);
                state.update(|o| {
                    o.pointer_move(pointer);
                });
            }
        });

        let pointer_up = EventListener::new(&window, "pointerup", move |_| {
            if state.with_untracked(|o| o.is_dragging()) {
                state.update(|o| o.pointer_up());
            }
        });

        Some(Self {
            _pointer_move: pointer_move,
            _pointer_up: pointer_up,
        })
    }
}

fn pointer_of(ev: &MouseEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

#[component]
pub fn VideoPreview(file: File, state: RwSignal<PreviewOverlay>) -> impl IntoView {
    let name = file.name();
    let url = ObjectUrl::from(gloo::file::File::from(file));
    let src = url.to_string();

    let url = StoredValue::new_local(url);
    let listeners = StoredValue::new_local(DragListeners::install(state));
    if listeners.with_value(|l| l.is_none()) {
        gloo::console::warn!("window is not available; preview cannot be dragged");
    }
    on_cleanup(move || {
        listeners.dispose();
        url.dispose();
    });

    let close = move || state.update(|o| o.close());

    view! {
        <div class="preview-backdrop" on:click=move |_| close()>
            <div
                class="preview-panel"
                class:dragging=move || state.with(|o| o.is_dragging())
                style=move || {
                    state
                        .with(|o| o.position())
                        .map(|p| format!("left: {}px; top: {}px;", p.x, p.y))
                        .unwrap_or_default()
                }
                on:click=|ev: MouseEvent| ev.stop_propagation()
                on:pointerdown=move |ev: PointerEvent| {
                    ev.prevent_default();
                    let pointer = pointer_of(&ev);
                    state.update(|o| {
                        o.pointer_down(pointer);
                    });
                }
            >
                <div class="preview-header">
                    <span class="preview-title">{name}</span>
                    <button
                        type="button"
                        class="preview-close"
                        on:pointerdown=|ev: PointerEvent| ev.stop_propagation()
                        on:click=move |_| close()
                    >
                        "✕"
                    </button>
                </div>
                <video
                    class="preview-video"
                    src=src
                    controls=true
                    on:pointerdown=|ev: PointerEvent| ev.stop_propagation()
                />
            </div>
        </div>
    }
}

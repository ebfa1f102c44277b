//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップまたはクリックで動画を1本選ぶ。検証は呼び出し側で行う。

use leptos::html;
use leptos::prelude::*;
use web_sys::{DragEvent, File};
use workout_assess_common::{accept_attribute, format_size, FileMeta};

#[component]
pub fn UploadArea<F>(
    /// 送信中は受け付けない
    disabled: Signal<bool>,
    max_bytes: u64,
    on_file: F,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if disabled.get_untracked() {
                return;
            }

            // 複数ドロップされた場合は先頭のみ
            if let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                on_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !disabled.get_untracked() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if disabled.get_untracked() {
            return;
        }
        // ファイル選択ダイアログを開く
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |_| {
        let Some(input) = input_ref.get() else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file(file);
        }
        // 同じファイルを選び直しても change が発火するように
        input.set_value("");
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if disabled.get() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"🎬"</div>
            <p>"Drag & drop your workout video or click to choose"</p>
            <p class="text-muted">
                {format!("Supported: MP4, MOV, WebM, MKV (max {})", format_size(max_bytes))}
            </p>
        </div>
        <input
            type="file"
            class="hidden-input"
            accept=accept_attribute()
            node_ref=input_ref
            on:change=on_change
        />
    }
}

/// 選択中ファイルの表示（プレビュー・解除ボタン付き）
#[component]
pub fn SelectedFile<FP, FC>(
    file: Signal<Option<FileMeta>>,
    disabled: Signal<bool>,
    on_preview: FP,
    on_clear: FC,
) -> impl IntoView
where
    FP: Fn(()) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    move || {
        file.get().map(|meta| {
            let on_preview = on_preview.clone();
            let on_clear = on_clear.clone();
            view! {
                <div class="selected-file">
                    <div class="selected-file-info">
                        <span class="selected-file-name">{meta.name.clone()}</span>
                        <span class="text-muted">{format_size(meta.size)}</span>
                    </div>
                    <div class="selected-file-actions">
                        <button
                            type="button"
                            class="btn btn-secondary btn-small"
                            on:click=move |_| on_preview(())
                        >
                            "Preview"
                        </button>
                        <button
                            type="button"
                            class="btn btn-tertiary btn-small"
                            disabled=move || disabled.get()
                            on:click=move |_| on_clear(())
                        >
                            "Remove"
                        </button>
                    </div>
                </div>
            }
        })
    }
}

//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;
use workout_assess_common::{
    declared_or_inferred_media_type, AssessmentClient, Error, ExerciseType, FileMeta,
    PreviewOverlay, UploadSession, UploadStatus,
};

use crate::api::{assessment::FetchClient, client_config};
use crate::components::{
    exercise_selector::ExerciseSelector,
    header::Header,
    preview_overlay::VideoPreview,
    result_overlay::ResultOverlay,
    submit_button::SubmitButton,
    upload_area::{SelectedFile, UploadArea},
};

/// アップロードセッション（`web_sys::File` を保持するためローカル保存）
pub type SessionSignal = RwSignal<UploadSession<File>, LocalStorage>;

fn file_meta(file: &File) -> FileMeta {
    let name = file.name();
    let media_type = declared_or_inferred_media_type(&name, &file.type_());
    FileMeta::new(name, file.size() as u64, media_type)
}

/// 選択が変わったらプレビューを閉じる
fn sync_preview(session: SessionSignal, preview: RwSignal<PreviewOverlay>) {
    let current = session.with_untracked(|s| s.selection_id());
    if preview.with_untracked(|p| p.selection().is_some() && p.selection() != current) {
        preview.update(|p| {
            p.sync_selection(current);
        });
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = client_config();
    let max_bytes = config.max_upload_bytes;
    let client = FetchClient::new(config);

    // アプリケーション状態
    let session: SessionSignal = RwSignal::new_local(UploadSession::new(max_bytes));
    let preview = RwSignal::new(PreviewOverlay::default());

    let is_submitting = Signal::derive(move || session.with(|s| s.is_submitting()));
    let can_submit = Signal::derive(move || session.with(|s| s.can_submit()));
    let exercise = Signal::derive(move || session.with(|s| s.exercise()));
    let selected_meta = Signal::derive(move || session.with(|s| s.selection().map(|f| f.meta.clone())));
    let failure = Signal::derive(move || {
        session.with(|s| {
            (s.status() == UploadStatus::Failed)
                .then(|| s.error().unwrap_or_default().to_string())
        })
    });
    let result = Memo::new(move |_| session.with(|s| s.result().cloned()));

    // 種目選択ハンドラ
    let on_exercise = move |kind: ExerciseType| {
        let outcome = session.try_update(|s| s.select_exercise(kind));
        if let Some(Err(e)) = outcome {
            gloo::console::warn!(format!("exercise change ignored: {}", e));
        }
    };

    // ファイル選択ハンドラ（検証NGはダイアログで通知して破棄）
    let on_file = move |file: File| {
        let meta = file_meta(&file);
        let outcome = session.try_update(|s| s.select_file(file, meta.clone()));
        match outcome {
            Some(Ok(id)) => {
                gloo::console::log!(format!(
                    "selected #{} {} ({} bytes, {})",
                    id, meta.name, meta.size, meta.media_type
                ));
                sync_preview(session, preview);
            }
            Some(Err(Error::Validation(e))) => {
                gloo::console::warn!(format!("rejected {}: {}", meta.name, e));
                gloo::dialogs::alert(&e.to_string());
            }
            Some(Err(e)) => gloo::console::warn!(format!("selection ignored: {}", e)),
            None => {}
        }
    };

    let on_preview = move |_: ()| {
        if let Some(id) = session.with_untracked(|s| s.selection_id()) {
            preview.update(|p| p.open(id));
        }
    };

    let on_clear = move |_: ()| {
        if session.try_update(|s| s.clear_file()).is_some_and(|r| r.is_ok()) {
            sync_preview(session, preview);
        }
    };

    // 送信ハンドラ（送信中の再実行はセッション側で拒否される）
    let on_submit = move |_: ()| {
        let ticket = match session.try_update(|s| s.begin_submit()) {
            Some(Ok(ticket)) => ticket,
            Some(Err(e)) => {
                gloo::console::warn!(format!("submit ignored: {}", e));
                return;
            }
            None => return,
        };

        gloo::console::log!(format!(
            "submitting #{} {} as {}",
            ticket.submission, ticket.meta.name, ticket.exercise
        ));

        let client = client.clone();
        spawn_local(async move {
            let outcome = client
                .assess(&ticket.handle, &ticket.meta, ticket.exercise)
                .await;
            match &outcome {
                Ok(r) => gloo::console::log!(format!(
                    "assessment #{} done: {}",
                    ticket.submission,
                    serde_json::to_string(r).unwrap_or_default()
                )),
                Err(e) => gloo::console::error!(format!("assessment #{} failed: {}", ticket.submission, e)),
            }
            session.update(|s| {
                s.complete(ticket.submission, outcome);
            });
        });
    };

    let on_close_result = move |_: ()| session.update(|s| s.dismiss_result());

    view! {
        <div class="container">
            <Header />

            <ExerciseSelector selected=exercise disabled=is_submitting on_select=on_exercise />

            <UploadArea disabled=is_submitting max_bytes=max_bytes on_file=on_file />

            <SelectedFile
                file=selected_meta
                disabled=is_submitting
                on_preview=on_preview
                on_clear=on_clear
            />

            <SubmitButton can_submit=can_submit is_submitting=is_submitting on_submit=on_submit />

            {move || failure.get().map(|message| view! {
                <div class="error-banner" role="alert">{message}</div>
            })}

            <Show when=move || preview.with(|p| p.is_open())>
                {move || {
                    session
                        .with_untracked(|s| s.selection().map(|f| f.handle.clone()))
                        .map(|file| view! { <VideoPreview file=file state=preview /> })
                }}
            </Show>

            <ResultOverlay result=result on_close=on_close_result />
        </div>
    }
}

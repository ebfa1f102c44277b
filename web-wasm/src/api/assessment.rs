//! 評価サービス連携（fetch + FormData）
//!
//! `POST /assessment/` に `exercise_type` と `file` の2パートを送る。
//! 1回の呼び出しで1リクエストのみ。タイムアウト時は AbortController で中断する。

use futures::future::{select, Either};
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, File, FormData, Request, RequestInit, RequestMode, Response};
use workout_assess_common::{
    parse_assessment_response, status_error, AssessmentClient, AssessmentResult, ClientConfig,
    Error, ExerciseType, FileMeta, Result,
};

/// ブラウザ版クライアント
#[derive(Debug, Clone)]
pub struct FetchClient {
    config: ClientConfig,
}

impl FetchClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl AssessmentClient<File> for FetchClient {
    async fn assess(
        &self,
        file: &File,
        meta: &FileMeta,
        exercise: ExerciseType,
    ) -> Result<AssessmentResult> {
        let controller = AbortController::new().map_err(transport_error)?;
        let request = build_request(&self.config.assessment_url(), file, meta, exercise, &controller)?;

        let timeout_ms = self.config.timeout_seconds.saturating_mul(1000).min(u32::MAX as u64) as u32;
        let fetch = Box::pin(send(request));
        let timer = Box::pin(TimeoutFuture::new(timeout_ms));

        match select(fetch, timer).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(_) => {
                controller.abort();
                Err(Error::Timeout(self.config.timeout_seconds))
            }
        }
    }
}

fn build_request(
    url: &str,
    file: &File,
    meta: &FileMeta,
    exercise: ExerciseType,
    controller: &AbortController,
) -> Result<Request> {
    let form = FormData::new().map_err(transport_error)?;
    form.append_with_str("exercise_type", exercise.as_str())
        .map_err(transport_error)?;
    form.append_with_blob_and_filename("file", file, &meta.name)
        .map_err(transport_error)?;

    // Content-Type はブラウザが boundary 付きで設定する
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);
    opts.set_signal(Some(&controller.signal()));

    Request::new_with_str_and_init(url, &opts).map_err(transport_error)
}

async fn send(request: Request) -> Result<AssessmentResult> {
    let window = web_sys::window().ok_or_else(|| Error::Transport("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport_error)?;
    let resp: Response = resp_value.dyn_into().map_err(transport_error)?;

    let body = read_text(&resp).await?;
    if !resp.ok() {
        return Err(status_error(resp.status(), &body));
    }

    parse_assessment_response(&body)
}

async fn read_text(resp: &Response) -> Result<String> {
    let promise = resp.text().map_err(transport_error)?;
    let text = JsFuture::from(promise).await.map_err(transport_error)?;
    Ok(text.as_string().unwrap_or_default())
}

/// JsValue のエラーを読める文字列にする
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", value)
}

fn transport_error(value: JsValue) -> Error {
    Error::Transport(js_error_message(&value))
}

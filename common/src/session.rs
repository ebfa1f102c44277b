//! アップロードセッション
//!
//! 選択中のファイル・種目・送信状態・直近の結果を一か所で管理する。
//!
//! 状態遷移:
//! - `Idle` -> `Submitting`（ファイル選択済みのときのみ）
//! - `Submitting` -> `Succeeded` / `Failed`
//! - `Succeeded` / `Failed` -> `Idle`（新しいファイル選択時）、または再送信で `Submitting`
//!
//! 送信中は種目・ファイルの変更と二重送信を拒否する。

use std::cell::RefCell;

use crate::config::DEFAULT_MAX_UPLOAD_BYTES;
use crate::error::{Error, Result};
use crate::exercise::ExerciseType;
use crate::types::{AssessmentResult, FileMeta};
use crate::validator::validate;

/// ファイル選択ごとに振られるID（プレビューの無効化判定に使う）
pub type SelectionId = u64;

/// 送信ごとに振られるID（受信結果の識別に使う）
pub type SubmissionId = u64;

/// 送信状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl UploadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadStatus::Idle => "idle",
            UploadStatus::Submitting => "submitting",
            UploadStatus::Succeeded => "succeeded",
            UploadStatus::Failed => "failed",
        }
    }
}

/// 選択中のファイル
///
/// `handle` は実データへの参照（ブラウザでは `web_sys::File`、CLIではパス）。
#[derive(Debug, Clone)]
pub struct FileSelection<H> {
    pub id: SelectionId,
    pub handle: H,
    pub meta: FileMeta,
}

/// 受信した評価結果
///
/// 同じ値の結果でも送信が異なれば `submission` が異なり、別の結果として扱う。
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedResult {
    pub submission: SubmissionId,
    pub result: AssessmentResult,
}

/// 送信開始時に払い出される送信内容のスナップショット
#[derive(Debug, Clone)]
pub struct SubmitTicket<H> {
    pub submission: SubmissionId,
    pub selection: SelectionId,
    pub handle: H,
    pub meta: FileMeta,
    pub exercise: ExerciseType,
}

/// 評価サービスクライアント
///
/// 1回の呼び出しで1回だけリクエストを送る。再試行・キャッシュはしない。
#[allow(async_fn_in_trait)]
pub trait AssessmentClient<H> {
    async fn assess(
        &self,
        file: &H,
        meta: &FileMeta,
        exercise: ExerciseType,
    ) -> Result<AssessmentResult>;
}

/// アップロードセッション
#[derive(Debug, Clone)]
pub struct UploadSession<H> {
    selection: Option<FileSelection<H>>,
    exercise: ExerciseType,
    status: UploadStatus,
    result: Option<ReceivedResult>,
    error: Option<String>,
    in_flight: Option<SubmissionId>,
    max_upload_bytes: u64,
    next_selection: SelectionId,
    next_submission: SubmissionId,
}

impl<H> Default for UploadSession<H> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UPLOAD_BYTES)
    }
}

impl<H> UploadSession<H> {
    pub fn new(max_upload_bytes: u64) -> Self {
        Self {
            selection: None,
            exercise: ExerciseType::default(),
            status: UploadStatus::Idle,
            result: None,
            error: None,
            in_flight: None,
            max_upload_bytes,
            next_selection: 1,
            next_submission: 1,
        }
    }

    pub fn status(&self) -> UploadStatus {
        self.status
    }

    pub fn exercise(&self) -> ExerciseType {
        self.exercise
    }

    pub fn selection(&self) -> Option<&FileSelection<H>> {
        self.selection.as_ref()
    }

    pub fn selection_id(&self) -> Option<SelectionId> {
        self.selection.as_ref().map(|s| s.id)
    }

    pub fn result(&self) -> Option<&ReceivedResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }

    pub fn is_submitting(&self) -> bool {
        self.status == UploadStatus::Submitting
    }

    /// 送信ボタンを有効にできるか
    pub fn can_submit(&self) -> bool {
        self.selection.is_some() && !self.is_submitting()
    }

    /// ファイルを選択する
    ///
    /// 検証に通れば選択を置き換え、前回の結果・エラーを消して `Idle` に戻す。
    /// 検証に失敗した場合は状態を一切変更しない。
    pub fn select_file(&mut self, handle: H, meta: FileMeta) -> Result<SelectionId> {
        if self.is_submitting() {
            return Err(Error::SubmissionInFlight);
        }
        validate(&meta, self.max_upload_bytes)?;

        let id = self.next_selection;
        self.next_selection += 1;
        self.selection = Some(FileSelection { id, handle, meta });
        self.result = None;
        self.error = None;
        self.status = UploadStatus::Idle;
        Ok(id)
    }

    /// 種目を選択する（送信中は不可）
    pub fn select_exercise(&mut self, exercise: ExerciseType) -> Result<()> {
        if self.is_submitting() {
            return Err(Error::SubmissionInFlight);
        }
        self.exercise = exercise;
        Ok(())
    }

    /// 選択中のファイルを外す（送信中は不可）
    pub fn clear_file(&mut self) -> Result<()> {
        if self.is_submitting() {
            return Err(Error::SubmissionInFlight);
        }
        self.selection = None;
        self.error = None;
        self.status = UploadStatus::Idle;
        Ok(())
    }

    /// 結果を閉じる
    pub fn dismiss_result(&mut self) {
        self.result = None;
    }

    /// 送信を開始する
    ///
    /// 送信中なら `SubmissionInFlight`、未選択なら `NoFileSelected` を返し、状態は変えない。
    pub fn begin_submit(&mut self) -> Result<SubmitTicket<H>>
    where
        H: Clone,
    {
        if self.is_submitting() {
            return Err(Error::SubmissionInFlight);
        }
        let selection = self.selection.as_ref().ok_or(Error::NoFileSelected)?;

        let submission = self.next_submission;
        self.next_submission += 1;
        let ticket = SubmitTicket {
            submission,
            selection: selection.id,
            handle: selection.handle.clone(),
            meta: selection.meta.clone(),
            exercise: self.exercise,
        };

        self.in_flight = Some(submission);
        self.status = UploadStatus::Submitting;
        self.result = None;
        self.error = None;
        Ok(ticket)
    }

    /// 送信結果を反映する
    ///
    /// 実行中の送信以外のIDは無視して false を返す。
    pub fn complete(&mut self, submission: SubmissionId, outcome: Result<AssessmentResult>) -> bool {
        match outcome {
            Ok(result) => self.succeed(submission, result),
            Err(e) => self.fail(submission, e.to_string()),
        }
    }

    fn succeed(&mut self, submission: SubmissionId, result: AssessmentResult) -> bool {
        if !self.take_in_flight(submission) {
            return false;
        }
        self.status = UploadStatus::Succeeded;
        self.result = Some(ReceivedResult { submission, result });
        self.error = None;
        true
    }

    fn fail(&mut self, submission: SubmissionId, message: String) -> bool {
        if !self.take_in_flight(submission) {
            return false;
        }
        self.status = UploadStatus::Failed;
        self.result = None;
        self.error = Some(message);
        true
    }

    fn take_in_flight(&mut self, submission: SubmissionId) -> bool {
        if self.in_flight == Some(submission) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// 送信して結果を待つ
    ///
    /// `&mut self` を保持したまま待つため、同一セッションへの二重送信はできない。
    pub async fn submit<C>(&mut self, client: &C) -> Result<()>
    where
        H: Clone,
        C: AssessmentClient<H>,
    {
        let ticket = self.begin_submit()?;
        let outcome = client.assess(&ticket.handle, &ticket.meta, ticket.exercise).await;
        finish(self, ticket.submission, outcome)
    }
}

/// 共有セッションに対して送信する
///
/// 待機中は借用を解放するため、他の操作（二重送信の試行を含む）を受け付ける。
/// 二重送信は `SubmissionInFlight` で即座に返り、リクエストは送られない。
pub async fn submit_shared<H, C>(session: &RefCell<UploadSession<H>>, client: &C) -> Result<()>
where
    H: Clone,
    C: AssessmentClient<H>,
{
    let ticket = session.borrow_mut().begin_submit()?;
    let outcome = client.assess(&ticket.handle, &ticket.meta, ticket.exercise).await;
    let mut session = session.borrow_mut();
    finish(&mut session, ticket.submission, outcome)
}

fn finish<H>(
    session: &mut UploadSession<H>,
    submission: SubmissionId,
    outcome: Result<AssessmentResult>,
) -> Result<()> {
    match outcome {
        Ok(result) => {
            session.succeed(submission, result);
            Ok(())
        }
        Err(e) => {
            session.fail(submission, e.to_string());
            Err(e)
        }
    }
}

//! 動画1本の評価フロー（ファイル選択 → 検証 → 送信）

use std::path::{Path, PathBuf};

use workout_assess_common::{
    media_type_for_extension, AssessmentClient, ExerciseType, FileMeta, UploadSession,
};

use crate::error::{AssessCliError, Result};

/// パスからファイル情報を作る（種別は拡張子から推定）
pub fn file_meta(path: &Path) -> Result<FileMeta> {
    if !path.is_file() {
        return Err(AssessCliError::FileNotFound(path.display().to_string()));
    }
    let size = std::fs::metadata(path)?.len();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let media_type = media_type_for_extension(&name);
    Ok(FileMeta::new(name, size, media_type))
}

/// セッションに動画を選択して送信する
///
/// 検証NGのときは送信せず、セッションは元の状態のまま返る。
/// 送信後の成功・失敗はセッションの状態にも反映される。
pub async fn assess_file<C>(
    session: &mut UploadSession<PathBuf>,
    client: &C,
    path: &Path,
    exercise: ExerciseType,
) -> Result<()>
where
    C: AssessmentClient<PathBuf>,
{
    session.select_exercise(exercise)?;
    let meta = file_meta(path)?;
    session.select_file(path.to_path_buf(), meta)?;
    session.submit(client).await?;
    Ok(())
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssessCliError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("{0}")]
    Assessment(#[from] workout_assess_common::Error),

    #[error("HTTPクライアントの初期化に失敗: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<workout_assess_common::ValidationError> for AssessCliError {
    fn from(e: workout_assess_common::ValidationError) -> Self {
        AssessCliError::Assessment(e.into())
    }
}

pub type Result<T> = std::result::Result<T, AssessCliError>;

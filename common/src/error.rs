//! エラー型定義

use thiserror::Error;

/// ファイル選択時の検証エラー
///
/// 利用者にそのまま表示する文言を持つ。選択中のファイルは変更されない。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unsupported file type \"{0}\". Please choose an MP4, MOV, WebM or MKV video.")]
    UnsupportedType(String),

    #[error("\"{name}\" is {size}, which exceeds the {limit} upload limit.")]
    TooLarge {
        name: String,
        size: String,
        limit: String,
    },

    #[error("\"{0}\" is empty.")]
    Empty(String),
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to get assessment: {0}")]
    Transport(String),

    #[error("Failed to get assessment (HTTP {status}){}", .detail.as_deref().map(|d| format!(": {}", d)).unwrap_or_default())]
    Status { status: u16, detail: Option<String> },

    #[error("Failed to get assessment: no response after {0} seconds")]
    Timeout(u64),

    #[error("Assessment response could not be read: {0}")]
    MalformedResponse(String),

    #[error("Assessment service reported: {0}")]
    Service(String),

    #[error("Select a video before submitting")]
    NoFileSelected,

    #[error("An assessment is already in progress")]
    SubmissionInFlight,
}

impl Error {
    /// 送信失敗として扱うエラーか（通信・HTTP・タイムアウト・応答不正）
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Transport(_)
                | Error::Status { .. }
                | Error::Timeout(_)
                | Error::MalformedResponse(_)
                | Error::Service(_)
        )
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_validation() {
        let error: Error = ValidationError::UnsupportedType("video/x-msvideo".to_string()).into();
        let display = format!("{}", error);
        assert!(display.contains("video/x-msvideo"));
        assert!(display.contains("MP4"));
    }

    #[test]
    fn test_error_display_status_with_detail() {
        let error = Error::Status {
            status: 400,
            detail: Some("Unknown exercise".to_string()),
        };
        assert_eq!(
            format!("{}", error),
            "Failed to get assessment (HTTP 400): Unknown exercise"
        );
    }

    #[test]
    fn test_error_display_status_without_detail() {
        let error = Error::Status { status: 500, detail: None };
        assert_eq!(format!("{}", error), "Failed to get assessment (HTTP 500)");
    }

    #[test]
    fn test_error_display_timeout() {
        let display = format!("{}", Error::Timeout(120));
        assert!(display.contains("120 seconds"));
    }

    #[test]
    fn test_is_transport() {
        assert!(Error::Transport("offline".into()).is_transport());
        assert!(Error::Status { status: 502, detail: None }.is_transport());
        assert!(Error::Timeout(5).is_transport());
        assert!(Error::MalformedResponse("eof".into()).is_transport());
        assert!(Error::Service("No pose detected in video.".into()).is_transport());
        assert!(!Error::NoFileSelected.is_transport());
        assert!(!Error::SubmissionInFlight.is_transport());
        assert!(!Error::Validation(ValidationError::Empty("a.mp4".into())).is_transport());
    }
}

//! アップロード前の動画ファイル検証

use crate::error::ValidationError;
use crate::types::{format_size, FileMeta};

/// 受け付けるMIMEタイプ
pub const ALLOWED_MEDIA_TYPES: [&str; 4] = [
    "video/mp4",
    "video/quicktime",
    "video/webm",
    "video/x-matroska",
];

/// ファイル選択ダイアログの `accept` 属性値
pub fn accept_attribute() -> String {
    ALLOWED_MEDIA_TYPES.join(",")
}

/// MIMEタイプが許可リストに含まれるか
///
/// `video/mp4; codecs=...` のようなパラメータ付きも本体部分で判定する。
pub fn is_allowed_media_type(media_type: &str) -> bool {
    let essence = media_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    ALLOWED_MEDIA_TYPES.contains(&essence.as_str())
}

/// 候補ファイルを検証する
///
/// 拒否理由は `ValidationError` の表示文字列としてそのまま利用者に見せられる。
pub fn validate(candidate: &FileMeta, max_bytes: u64) -> Result<(), ValidationError> {
    if !is_allowed_media_type(&candidate.media_type) {
        let shown = if candidate.media_type.is_empty() {
            candidate.name.clone()
        } else {
            candidate.media_type.clone()
        };
        return Err(ValidationError::UnsupportedType(shown));
    }

    if candidate.size == 0 {
        return Err(ValidationError::Empty(candidate.name.clone()));
    }

    if candidate.size > max_bytes {
        return Err(ValidationError::TooLarge {
            name: candidate.name.clone(),
            size: format_size(candidate.size),
            limit: format_size(max_bytes),
        });
    }

    Ok(())
}

/// ブラウザが申告したMIMEタイプ。空のときは拡張子から推定する
pub fn declared_or_inferred_media_type(file_name: &str, declared: &str) -> String {
    let declared = declared.trim();
    if declared.is_empty() {
        media_type_for_extension(file_name).to_string()
    } else {
        declared.to_string()
    }
}

/// 拡張子からMIMEタイプを推定（ブラウザ以外で使用）
pub fn media_type_for_extension(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "mp4" | "m4v" => "video/mp4",
        "mov" | "qt" => "video/quicktime",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "wmv" => "video/x-ms-wmv",
        "flv" => "video/x-flv",
        "mpeg" | "mpg" => "video/mpeg",
        "3gp" => "video/3gpp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_UPLOAD_BYTES;

    fn candidate(media_type: &str) -> FileMeta {
        FileMeta::new("workout", 1024, media_type)
    }

    #[test]
    fn test_accepts_allowed_types() {
        for media_type in ALLOWED_MEDIA_TYPES {
            assert_eq!(validate(&candidate(media_type), DEFAULT_MAX_UPLOAD_BYTES), Ok(()));
        }
    }

    #[test]
    fn test_rejects_other_types() {
        let rejected = [
            "video/x-msvideo",
            "video/mpeg",
            "video/3gpp",
            "image/png",
            "application/octet-stream",
            "text/plain",
            "",
        ];
        for media_type in rejected {
            let result = validate(&candidate(media_type), DEFAULT_MAX_UPLOAD_BYTES);
            assert!(
                matches!(result, Err(ValidationError::UnsupportedType(_))),
                "{} should be rejected",
                media_type
            );
        }
    }

    #[test]
    fn test_media_type_parameters_and_case() {
        assert!(is_allowed_media_type("video/mp4; codecs=\"avc1.42E01E\""));
        assert!(is_allowed_media_type("Video/WebM"));
        assert!(!is_allowed_media_type("video/mp4x"));
    }

    #[test]
    fn test_rejects_too_large() {
        let file = FileMeta::new("long.mp4", DEFAULT_MAX_UPLOAD_BYTES + 1, "video/mp4");
        let err = validate(&file, DEFAULT_MAX_UPLOAD_BYTES).unwrap_err();
        assert!(matches!(err, ValidationError::TooLarge { .. }));
        assert!(err.to_string().contains("50.0 MB"));
    }

    #[test]
    fn test_accepts_exact_limit() {
        let file = FileMeta::new("edge.mp4", DEFAULT_MAX_UPLOAD_BYTES, "video/mp4");
        assert_eq!(validate(&file, DEFAULT_MAX_UPLOAD_BYTES), Ok(()));
    }

    #[test]
    fn test_rejects_empty() {
        let file = FileMeta::new("empty.webm", 0, "video/webm");
        assert_eq!(
            validate(&file, DEFAULT_MAX_UPLOAD_BYTES),
            Err(ValidationError::Empty("empty.webm".to_string()))
        );
    }

    #[test]
    fn test_unsupported_without_declared_type_names_file() {
        let file = FileMeta::new("clip.xyz", 10, "");
        let err = validate(&file, DEFAULT_MAX_UPLOAD_BYTES).unwrap_err();
        assert!(err.to_string().contains("clip.xyz"));
    }

    #[test]
    fn test_media_type_for_extension() {
        assert_eq!(media_type_for_extension("squat.MP4"), "video/mp4");
        assert_eq!(media_type_for_extension("a.b.mov"), "video/quicktime");
        assert_eq!(media_type_for_extension("x.mkv"), "video/x-matroska");
        assert_eq!(media_type_for_extension("x.avi"), "video/x-msvideo");
        assert_eq!(media_type_for_extension("noext"), "application/octet-stream");
    }

    #[test]
    fn test_accept_attribute() {
        assert_eq!(
            accept_attribute(),
            "video/mp4,video/quicktime,video/webm,video/x-matroska"
        );
    }

    #[test]
    fn test_empty_declared_type_falls_back_to_extension() {
        let media_type = declared_or_inferred_media_type("deadlift.mkv", "");
        assert_eq!(media_type, "video/x-matroska");
        let candidate = FileMeta::new("deadlift.mkv", 1024, media_type);
        assert!(validate(&candidate, DEFAULT_MAX_UPLOAD_BYTES).is_ok());

        assert_eq!(
            declared_or_inferred_media_type("clip.bin", "  "),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_declared_type_wins() {
        assert_eq!(declared_or_inferred_media_type("clip.mkv", "video/webm"), "video/webm");
    }
}

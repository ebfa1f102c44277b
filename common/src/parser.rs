//! 評価サービス応答パーサー
//!
//! HTTPステータスの判定はクライアント側で行い、ここでは本文だけを扱う。

use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::AssessmentResult;

/// 成功応答の本文を AssessmentResult に変換
///
/// - JSONでない / 必須フィールド欠落 → MalformedResponse
/// - `{"error": "..."}` 形式 → Service
/// - スコアが 0〜100 の範囲外 → MalformedResponse
pub fn parse_assessment_response(body: &str) -> Result<AssessmentResult> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| Error::MalformedResponse(format!("not JSON ({})", e)))?;

    if let Some(message) = value.get("error").and_then(Value::as_str) {
        return Err(Error::Service(message.to_string()));
    }

    let result: AssessmentResult =
        serde_json::from_value(value).map_err(|e| Error::MalformedResponse(e.to_string()))?;

    for (name, score) in [
        ("score", result.score),
        ("frame_score", result.frame_score),
        ("phase_score", result.phase_score),
    ] {
        if !(0.0..=100.0).contains(&score) {
            return Err(Error::MalformedResponse(format!(
                "{} out of range: {}",
                name, score
            )));
        }
    }

    Ok(result)
}

/// 失敗応答の本文から `detail` を取り出す（FastAPI形式）
///
/// 取り出せなければ None。本文の解析失敗はエラーにしない。
pub fn extract_error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// 失敗ステータスをエラーに変換
pub fn status_error(status: u16, body: &str) -> Error {
    Error::Status {
        status,
        detail: extract_error_detail(body),
    }
}

/// ヘルスチェック応答から status 文字列を取り出す
pub fn parse_health_response(body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| Error::MalformedResponse(format!("not JSON ({})", e)))?;
    value
        .get("status")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Error::MalformedResponse("missing \"status\"".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success() {
        let body = r#"{"score": 82, "frame_score": 80, "phase_score": 84, "feedback": ["Keep back straight"]}"#;
        let result = parse_assessment_response(body).expect("パース失敗");
        assert_eq!(result.score, 82.0);
        assert_eq!(result.feedback, vec!["Keep back straight"]);
    }

    #[test]
    fn test_parse_preserves_feedback_order_and_duplicates() {
        let body = r#"{"score": 50, "frame_score": 50, "phase_score": 50,
            "feedback": ["b", "a", "b"]}"#;
        let result = parse_assessment_response(body).expect("パース失敗");
        assert_eq!(result.feedback, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_parse_not_json() {
        let err = parse_assessment_response("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_missing_field() {
        let err = parse_assessment_response(r#"{"score": 82, "feedback": []}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_null_sub_score() {
        let body = r#"{"score": 82, "frame_score": null, "phase_score": 84, "feedback": []}"#;
        assert!(matches!(
            parse_assessment_response(body),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_service_error() {
        let err = parse_assessment_response(r#"{"error": "No pose detected in video."}"#).unwrap_err();
        match err {
            Error::Service(message) => assert_eq!(message, "No pose detected in video."),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_out_of_range() {
        let body = r#"{"score": 120, "frame_score": 80, "phase_score": 84, "feedback": []}"#;
        let err = parse_assessment_response(body).unwrap_err();
        assert!(err.to_string().contains("score out of range"));
    }

    #[test]
    fn test_extract_error_detail() {
        assert_eq!(
            extract_error_detail(r#"{"detail": "Internal error: boom"}"#),
            Some("Internal error: boom".to_string())
        );
        assert_eq!(extract_error_detail("Internal Server Error"), None);
        assert_eq!(extract_error_detail(r#"{"message": "x"}"#), None);
        assert_eq!(extract_error_detail(r#"{"detail": null}"#), None);
    }

    #[test]
    fn test_extract_error_detail_structured() {
        let detail = extract_error_detail(r#"{"detail": [{"msg": "field required"}]}"#)
            .expect("detailが取れない");
        assert!(detail.contains("field required"));
    }

    #[test]
    fn test_status_error() {
        let err = status_error(500, "");
        assert!(matches!(err, Error::Status { status: 500, detail: None }));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_parse_health_response() {
        assert_eq!(
            parse_health_response(r#"{"status": "safe and sound!"}"#).expect("パース失敗"),
            "safe and sound!"
        );
        assert!(parse_health_response("{}").is_err());
    }
}

//! Workout Assess Common Library
//!
//! ブラウザ(WASM)とCLIで共有される型とアップロード処理の状態管理

pub mod animation;
pub mod config;
pub mod error;
pub mod exercise;
pub mod parser;
pub mod preview;
pub mod session;
pub mod types;
pub mod validator;

pub use animation::{ring_dash_offset, AnimationStep, ScoreAnimator, ANIMATION_DELAY_MS, RING_RADIUS};
pub use config::ClientConfig;
pub use error::{Error, Result, ValidationError};
pub use exercise::{ExerciseInfo, ExerciseType, EXERCISES};
pub use parser::{parse_assessment_response, parse_health_response, status_error};
pub use preview::{Point, PreviewOverlay, DEFAULT_POSITION};
pub use session::{
    submit_shared, AssessmentClient, FileSelection, ReceivedResult, SelectionId, SubmissionId,
    SubmitTicket, UploadSession, UploadStatus,
};
pub use types::{format_score, format_size, AssessmentResult, FileMeta, ScoreBand};
pub use validator::{
    accept_attribute, declared_or_inferred_media_type, media_type_for_extension, validate,
    ALLOWED_MEDIA_TYPES,
};

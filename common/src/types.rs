//! 共有される型定義
//!
//! - FileMeta: 選択された動画のメタデータ（名前・サイズ・宣言MIMEタイプ）
//! - AssessmentResult: 評価サービスの応答

use serde::{Deserialize, Serialize};

use crate::exercise::ExerciseType;

/// 選択候補ファイルのメタデータ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    /// バイト数
    pub size: u64,
    /// ブラウザ（またはCLIの拡張子判定）が宣言したMIMEタイプ
    pub media_type: String,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size: u64, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            media_type: media_type.into(),
        }
    }
}

/// 評価結果
///
/// 各スコアは 0〜100。`feedback` は順序に意味があるため並べ替え・重複除去をしない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub score: f64,
    pub frame_score: f64,
    pub phase_score: f64,
    pub feedback: Vec<String>,

    /// サービスが返す種目（無い場合もある）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise: Option<ExerciseType>,
}

/// スコア帯
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn of(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Good
        } else if score >= 50.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
            ScoreBand::Poor => "poor",
        }
    }
}

impl AssessmentResult {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::of(self.score)
    }
}

/// スコア表示用（整数に丸める）
pub fn format_score(value: f64) -> String {
    format!("{:.0}", value)
}

/// バイト数を人が読める形式に変換（例: 12.3 MB）
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

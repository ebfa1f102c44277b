//! 種目の定義
//!
//! 種目ごとの表示情報（ID・ラベル・アイコン）は定数テーブル `EXERCISES` に集約する。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 評価対象の種目
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    #[default]
    Pushup,
    Pullup,
    Squat,
    Situp,
    JumpingJack,
}

/// 種目の表示情報
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseInfo {
    pub kind: ExerciseType,
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// 種目テーブル（セレクタの表示順）
pub const EXERCISES: [ExerciseInfo; 5] = [
    ExerciseInfo { kind: ExerciseType::Pushup, id: "pushup", label: "Push-up", icon: "💪" },
    ExerciseInfo { kind: ExerciseType::Pullup, id: "pullup", label: "Pull-up", icon: "🧗" },
    ExerciseInfo { kind: ExerciseType::Squat, id: "squat", label: "Squat", icon: "🏋️" },
    ExerciseInfo { kind: ExerciseType::Situp, id: "situp", label: "Sit-up", icon: "🧘" },
    ExerciseInfo { kind: ExerciseType::JumpingJack, id: "jumping_jack", label: "Jumping Jack", icon: "🤸" },
];

impl ExerciseType {
    /// 送信時の `exercise_type` フィールド値
    pub fn as_str(&self) -> &'static str {
        self.info().id
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }

    pub fn icon(&self) -> &'static str {
        self.info().icon
    }

    pub fn info(&self) -> &'static ExerciseInfo {
        match self {
            ExerciseType::Pushup => &EXERCISES[0],
            ExerciseType::Pullup => &EXERCISES[1],
            ExerciseType::Squat => &EXERCISES[2],
            ExerciseType::Situp => &EXERCISES[3],
            ExerciseType::JumpingJack => &EXERCISES[4],
        }
    }

    pub fn all() -> impl Iterator<Item = ExerciseType> {
        EXERCISES.iter().map(|e| e.kind)
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        EXERCISES
            .iter()
            .find(|e| e.id == normalized)
            .map(|e| e.kind)
            .ok_or_else(|| {
                let ids: Vec<&str> = EXERCISES.iter().map(|e| e.id).collect();
                format!("unknown exercise \"{}\" (expected one of: {})", s, ids.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_variants() {
        for info in EXERCISES.iter() {
            assert_eq!(info.kind.info(), info);
            assert_eq!(info.kind.as_str(), info.id);
        }
    }

    #[test]
    fn test_serialize_snake_case() {
        let json = serde_json::to_string(&ExerciseType::JumpingJack).expect("シリアライズ失敗");
        assert_eq!(json, "\"jumping_jack\"");
    }

    #[test]
    fn test_deserialize() {
        let kind: ExerciseType = serde_json::from_str("\"squat\"").expect("デシリアライズ失敗");
        assert_eq!(kind, ExerciseType::Squat);
    }

    #[test]
    fn test_from_str_accepts_hyphen_and_case() {
        assert_eq!("Jumping-Jack".parse::<ExerciseType>(), Ok(ExerciseType::JumpingJack));
        assert_eq!(" PULLUP ".parse::<ExerciseType>(), Ok(ExerciseType::Pullup));
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "burpee".parse::<ExerciseType>().unwrap_err();
        assert!(err.contains("burpee"));
        assert!(err.contains("jumping_jack"));
    }

    #[test]
    fn test_default_is_pushup() {
        assert_eq!(ExerciseType::default(), ExerciseType::Pushup);
        assert_eq!(ExerciseType::all().count(), 5);
    }
}

//! 評価結果のテキスト出力

use workout_assess_common::{format_score, AssessmentResult, ExerciseType};

const BAR_WIDTH: usize = 20;

/// スコアを棒グラフにする（例: ████████░░）
pub fn score_bar(score: f64) -> String {
    let filled = ((score.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// 結果を表示用テキストに整形（フィードバックは受信順の番号付き）
pub fn render_report(result: &AssessmentResult, exercise: ExerciseType) -> String {
    let mut lines = vec![
        format!("{} {}", exercise.icon(), exercise.label()),
        format!(
            "Score: {} / 100 [{}]",
            format_score(result.score),
            result.band().as_str()
        ),
        format!("  {}", score_bar(result.score)),
        format!("Frame Score: {}", format_score(result.frame_score)),
        format!("Phase Score: {}", format_score(result.phase_score)),
        "Feedback:".to_string(),
    ];

    if result.feedback.is_empty() {
        lines.push("  (none)".to_string());
    } else {
        lines.extend(
            result
                .feedback
                .iter()
                .enumerate()
                .map(|(i, line)| format!("  {}. {}", i + 1, line)),
        );
    }

    lines.join("\n")
}

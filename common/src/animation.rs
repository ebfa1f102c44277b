//! 結果オーバーレイのスコアアニメーション
//!
//! 新しい結果を受け取ると表示値を 0 に戻し、一定時間後に `score` まで進める。
//! 同じ結果の再描画ではやり直さない。

use crate::session::{ReceivedResult, SubmissionId};

/// 表示開始からリングを満たすまでの待ち時間
pub const ANIMATION_DELAY_MS: u32 = 200;

/// スコアリングの半径（SVG座標）
pub const RING_RADIUS: f64 = 54.0;

/// 呼び出し側が行うべき処理
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationStep {
    /// 表示値を 0 にし、`delay_ms` 後に `tick(submission)` を呼ぶ
    Start {
        submission: SubmissionId,
        delay_ms: u32,
    },
    /// 何もしない
    Unchanged,
    /// 結果が閉じられた。保留中のタイマーは破棄してよい
    Cleared,
}

#[derive(Debug, Clone, Default)]
pub struct ScoreAnimator {
    current: Option<SubmissionId>,
    target: f64,
    displayed: f64,
    pending: bool,
}

impl ScoreAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 描画のたびに現在の結果を渡す
    pub fn observe(&mut self, received: Option<&ReceivedResult>) -> AnimationStep {
        match received {
            None => {
                if self.current.take().is_some() {
                    self.displayed = 0.0;
                    self.pending = false;
                    AnimationStep::Cleared
                } else {
                    AnimationStep::Unchanged
                }
            }
            Some(r) if self.current == Some(r.submission) => AnimationStep::Unchanged,
            Some(r) => {
                self.current = Some(r.submission);
                self.target = r.result.score;
                self.displayed = 0.0;
                self.pending = true;
                AnimationStep::Start {
                    submission: r.submission,
                    delay_ms: ANIMATION_DELAY_MS,
                }
            }
        }
    }

    /// タイマー満了。対象の結果がまだ表示中なら表示値を `score` にして返す
    pub fn tick(&mut self, submission: SubmissionId) -> Option<f64> {
        if self.pending && self.current == Some(submission) {
            self.pending = false;
            self.displayed = self.target;
            Some(self.displayed)
        } else {
            None
        }
    }

    pub fn displayed(&self) -> f64 {
        self.displayed
    }
}

/// リングの円周
pub fn ring_circumference(radius: f64) -> f64 {
    2.0 * std::f64::consts::PI * radius
}

/// `stroke-dashoffset` 値（0で全周、円周で空）
pub fn ring_dash_offset(value: f64, radius: f64) -> f64 {
    let ratio = (value / 100.0).clamp(0.0, 1.0);
    ring_circumference(radius) * (1.0 - ratio)
}

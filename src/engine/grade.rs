//! Grading of finished runs.

use crate::config::GradeThresholds;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Coarse grade bucket of a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeTier {
    High,
    Mid,
    Low,
}

impl GradeTier {
    /// Bucket a percentage using `thresholds`.
    ///
    /// ```rust
    /// use trivia_engine::config::GradeThresholds;
    /// use trivia_engine::engine::GradeTier;
    ///
    /// let thresholds = GradeThresholds::default();
    /// assert_eq!(GradeTier::from_percentage(80, &thresholds), GradeTier::High);
    /// assert_eq!(GradeTier::from_percentage(79, &thresholds), GradeTier::Mid);
    /// assert_eq!(GradeTier::from_percentage(49, &thresholds), GradeTier::Low);
    /// ```
    pub fn from_percentage(percentage: u32, thresholds: &GradeThresholds) -> Self {
        if percentage >= thresholds.high {
            Self::High
        } else if percentage >= thresholds.mid {
            Self::Mid
        } else {
            Self::Low
        }
    }
}

/// `score * 100 / total`, rounded half up. Zero when `total` is zero.
pub fn percentage(score: u32, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let total = total as u64;
    ((u64::from(score) * 200 + total) / (2 * total)) as u32
}

/// Result screen data of a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub score: u32,
    pub total: usize,
    pub percentage: u32,
    pub tier: GradeTier,
    pub lives_remaining: u32,
    /// Time from the first confirm to the end of the run
    pub elapsed: Option<Duration>,
}

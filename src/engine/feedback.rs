//! Per-answer records exposed to the presentation layer.

use serde::{Deserialize, Serialize};

/// One confirmed answer of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub selected: usize,
    pub correct: bool,
}

/// What to highlight while showing feedback for the current question.
///
/// The correct option is always highlighted; `selected` is marked wrong
/// when `correct` is false.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub selected: usize,
    pub correct_index: usize,
    pub correct: bool,
}

impl AnswerFeedback {
    /// Whether `option` should be marked as the player's wrong pick.
    pub fn is_wrong_pick(&self, option: usize) -> bool {
        !self.correct && option == self.selected
    }
}

//! The mutable core of a quiz run.

use super::state::Phase;
use serde::{Deserialize, Serialize};

/// Snapshot of a quiz run.
///
/// Five scalar fields, copied out of the engine after every command. Only the
/// engine mutates it; hosts may serialize it verbatim.
///
/// # Example
///
/// ```rust
/// use trivia_engine::core::{Phase, QuizState};
///
/// let state = QuizState::initial(3);
/// assert_eq!(state.question_index(), 0);
/// assert_eq!(state.lives(), 3);
/// assert_eq!(state.phase(), Phase::Answering);
/// assert_eq!(state.selected_answer(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuizState {
    pub(crate) question_index: usize,
    pub(crate) selected_answer: Option<usize>,
    pub(crate) score: u32,
    pub(crate) lives: u32,
    pub(crate) phase: Phase,
}

impl QuizState {
    /// Fresh state at the first question with a full lives budget.
    pub fn initial(lives: u32) -> Self {
        Self {
            question_index: 0,
            selected_answer: None,
            score: 0,
            lives,
            phase: Phase::Answering,
        }
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}

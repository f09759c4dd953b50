//! Errors reported by the quiz engine.

use crate::core::Phase;
use crate::enforcement::{describe, BankViolation};
use thiserror::Error;

/// Caller-usage errors of the quiz engine.
///
/// A rejected command never changes the engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("Question bank is empty")]
    EmptyBank,

    #[error("Question bank is malformed: {}", describe(.0))]
    MalformedBank(Vec<BankViolation>),

    #[error("Invalid quiz config: {0}")]
    InvalidConfig(String),

    #[error("Option {index} is out of range for a question with {options} option(s)")]
    InvalidSelection { index: usize, options: usize },

    #[error("No answer selected")]
    NoAnswerSelected,

    #[error("Cannot {operation} while in phase {phase}")]
    InvalidPhaseTransition {
        operation: &'static str,
        phase: Phase,
    },

    #[error("Quiz already finished; only restart is allowed")]
    QuizAlreadyFinished,

    #[error("{view} is not available in phase {phase}")]
    ViewUnavailable { view: &'static str, phase: Phase },
}

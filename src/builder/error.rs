//! Build errors for question and bank builders.

use crate::enforcement::{describe, BankViolation};
use thiserror::Error;

/// Errors that can occur when building questions and banks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Question text not specified. Call .text(prompt) before .build()")]
    MissingText,

    #[error("Correct answer not specified. Call .correct(index) or .correct_option(text)")]
    MissingCorrectIndex,

    #[error("No questions defined. Add at least one question")]
    EmptyBank,

    #[error("Question failed validation: {}", describe(.0))]
    InvalidQuestion(Vec<BankViolation>),
}

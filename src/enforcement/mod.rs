//! Validation rules for banks and quiz states.
//!
//! Rules use Stillwater's `Validation` type so that a malformed bank or a
//! tampered checkpoint reports every problem in one pass instead of the
//! first one found.
//!
//! # Example
//!
//! ```rust
//! use trivia_engine::core::Question;
//! use trivia_engine::enforcement::{check_bank, into_result, BankViolation};
//!
//! let bank: Vec<Question> =
//!     serde_json::from_str(r#"[{"text":"","options":["a"],"correct_index":3}]"#).unwrap();
//!
//! let errors = into_result(check_bank(&bank)).unwrap_err();
//! assert_eq!(errors.len(), 3);
//! assert!(errors.contains(&BankViolation::EmptyText { question: 0 }));
//! ```

pub mod rules;
pub mod violations;

pub use rules::{
    check_answer_log, check_bank, check_question, check_state, BankValidation, StateValidation,
};
pub use violations::{BankViolation, StateViolation};

use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Flatten a rule outcome into a `Result` carrying every violation.
pub fn into_result<E: Clone>(validation: Validation<(), NonEmptyVec<E>>) -> Result<(), Vec<E>> {
    match validation {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}

/// Render violations as one `; `-separated line.
pub fn describe<E: std::fmt::Display>(violations: &[E]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

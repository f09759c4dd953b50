//! The quiz engine.
//!
//! # Key Concepts
//!
//! - **Commands**: `select_option`, `confirm`, `advance`, `restart` move the
//!   run through `Answering -> Feedback -> Answering | Finished`
//! - **Views**: progress, feedback and grading are derived on demand and
//!   never stored
//! - **Errors**: every misuse is a typed `QuizError`; rejected commands leave
//!   the engine untouched
//!
//! The engine logs through `tracing`: accepted transitions and rejected
//! commands at `debug`, finished runs and restarts at `info`.

mod error;
mod feedback;
mod grade;
mod machine;

pub use error::QuizError;
pub use feedback::{AnswerFeedback, AnswerRecord};
pub use grade::{percentage, GradeTier, QuizSummary};
pub use machine::QuizEngine;

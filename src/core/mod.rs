//! Core quiz types.
//!
//! This module contains the plain data of the quiz state machine:
//! - Phases via the `State` trait
//! - Questions
//! - The `QuizState` snapshot
//! - Immutable transition history
//!
//! Nothing in here performs I/O or logging.

mod history;
mod question;
mod quiz_state;
mod state;

pub use history::{StateHistory, StateTransition};
pub use question::Question;
pub use quiz_state::QuizState;
pub use state::{Phase, State};

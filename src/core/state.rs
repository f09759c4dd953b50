//! State trait and the quiz phase.
//!
//! Phases are the coarse states of the quiz state machine. The trait keeps
//! the pure inspection methods that history tracking and logging rely on.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for state machine states.
///
/// All methods are pure. States are small immutable values describing the
/// current position in a state machine.
///
/// # Required Traits
///
/// - `Clone`: states are copied into history records
/// - `PartialEq`: transitions compare states
/// - `Debug`: diagnostics
/// - `Serialize` + `Deserialize`: checkpoints persist states
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Phase of a quiz run.
///
/// # Example
///
/// ```rust
/// use trivia_engine::core::{Phase, State};
///
/// assert_eq!(Phase::Answering.name(), "Answering");
/// assert!(Phase::Finished.is_final());
/// assert!(!Phase::Feedback.is_final());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Awaiting or holding a tentative selection.
    #[default]
    Answering,
    /// Showing correctness of the last confirmed answer.
    Feedback,
    /// Terminal; the summary is available.
    Finished,
}

impl State for Phase {
    fn name(&self) -> &str {
        match self {
            Self::Answering => "Answering",
            Self::Feedback => "Feedback",
            Self::Finished => "Finished",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

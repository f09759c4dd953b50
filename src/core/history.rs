//! Phase transition history.
//!
//! Every phase change of a quiz run is kept as an immutable record so hosts
//! can replay the path a player took and how long it lasted.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase change.
///
/// # Example
///
/// ```rust
/// use trivia_engine::core::{Phase, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Phase::Answering,
///     to: Phase::Feedback,
///     timestamp: Utc::now(),
///     question_index: 0,
/// };
/// assert_eq!(transition.to, Phase::Feedback);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Question the run was on when the transition fired
    pub question_index: usize,
}

/// Ordered history of state transitions.
///
/// History is immutable: `record` returns a new history with the transition
/// appended.
///
/// # Example
///
/// ```rust
/// use trivia_engine::core::{Phase, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Phase::Answering,
///         to: Phase::Feedback,
///         timestamp: Utc::now(),
///         question_index: 0,
///     })
///     .record(StateTransition {
///         from: Phase::Feedback,
///         to: Phase::Finished,
///         timestamp: Utc::now(),
///         question_index: 0,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Phase::Answering, &Phase::Feedback, &Phase::Finished]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The receiver is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the first transition's `from` state followed by the `to`
    /// state of each transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last transition, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Number of transitions that entered `state`.
    pub fn count_entries(&self, state: &S) -> usize {
        self.transitions.iter().filter(|t| &t.to == state).count()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;

    fn transition(from: Phase, to: Phase, question_index: usize) -> StateTransition<Phase> {
        StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            question_index,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Phase> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(transition(Phase::Answering, Phase::Feedback, 0));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(new_history.transitions().len(), 1);
    }

    #[test]
    fn get_path_returns_phase_sequence() {
        let history = StateHistory::new()
            .record(transition(Phase::Answering, Phase::Feedback, 0))
            .record(transition(Phase::Feedback, Phase::Answering, 0))
            .record(transition(Phase::Answering, Phase::Feedback, 1));

        let path = history.get_path();
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], &Phase::Answering);
        assert_eq!(path[1], &Phase::Feedback);
        assert_eq!(path[2], &Phase::Answering);
        assert_eq!(path[3], &Phase::Feedback);
    }

    #[test]
    fn count_entries_counts_target_states() {
        let history = StateHistory::new()
            .record(transition(Phase::Answering, Phase::Feedback, 0))
            .record(transition(Phase::Feedback, Phase::Answering, 0))
            .record(transition(Phase::Answering, Phase::Feedback, 1))
            .record(transition(Phase::Feedback, Phase::Finished, 1));

        assert_eq!(history.count_entries(&Phase::Feedback), 2);
        assert_eq!(history.count_entries(&Phase::Finished), 1);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let history = StateHistory::new()
            .record(StateTransition {
                from: Phase::Answering,
                to: Phase::Feedback,
                timestamp: start,
                question_index: 0,
            })
            .record(StateTransition {
                from: Phase::Feedback,
                to: Phase::Finished,
                timestamp: start + chrono::Duration::milliseconds(250),
                question_index: 0,
            });

        assert_eq!(
            history.duration(),
            Some(std::time::Duration::from_millis(250))
        );
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(transition(Phase::Answering, Phase::Feedback, 0));
        assert_eq!(history.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(transition(Phase::Answering, Phase::Feedback, 3));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<Phase> = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
        assert_eq!(deserialized.transitions()[0].question_index, 3);
    }
}

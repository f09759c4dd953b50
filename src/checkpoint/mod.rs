//! Checkpoint and resume for quiz runs.
//!
//! A checkpoint captures everything about a run except the bank and config,
//! which the host already owns. Resuming re-validates the captured state
//! against the bank so a stale or tampered checkpoint cannot produce an
//! engine that breaks the run invariants.

use crate::config::QuizConfig;
use crate::core::{Phase, Question, QuizState, StateHistory};
use crate::engine::{AnswerRecord, QuizEngine};
use crate::enforcement::{check_answer_log, check_state, describe, into_result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a quiz run.
/// Does NOT include the question bank or config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Number of questions in the bank the run was played on
    pub bank_len: usize,

    /// Lives granted at the start of the run
    pub lives_budget: u32,

    pub state: QuizState,

    /// Answers confirmed so far, oldest first
    pub answers: Vec<AnswerRecord>,

    /// Phase changes of the run
    pub history: StateHistory<Phase>,
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}

impl QuizEngine {
    /// Capture the current run.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            bank_len: self.bank().len(),
            lives_budget: self.config().lives,
            state: self.state(),
            answers: self.answers().to_vec(),
            history: self.history().clone(),
        }
    }

    /// Rebuild an engine from a checkpoint taken over the same bank.
    ///
    /// Fails if the checkpoint version is unknown, the bank or config differ
    /// from the captured run, or the captured state, answer log or history
    /// break any run invariant.
    pub fn resume(
        bank: Vec<Question>,
        config: QuizConfig,
        checkpoint: Checkpoint,
    ) -> Result<Self, CheckpointError> {
        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        QuizEngine::validate_inputs(&bank, &config)?;

        if checkpoint.bank_len != bank.len() {
            return Err(CheckpointError::ValidationFailed(format!(
                "checkpoint covers {} question(s), bank has {}",
                checkpoint.bank_len,
                bank.len()
            )));
        }

        if checkpoint.lives_budget != config.lives {
            return Err(CheckpointError::ValidationFailed(format!(
                "checkpoint was played with {} lives, config grants {}",
                checkpoint.lives_budget, config.lives
            )));
        }

        let state = checkpoint.state;
        let checks = vec![
            check_state(&state, &bank, config.lives),
            check_answer_log(&state, &checkpoint.answers, &checkpoint.history, &bank),
        ];
        into_result(Validation::all_vec(checks).map(|_| ()))
            .map_err(|violations| CheckpointError::ValidationFailed(describe(&violations)))?;

        tracing::info!(
            checkpoint = %checkpoint.id,
            question = state.question_index(),
            phase = %state.phase(),
            "Resumed quiz from checkpoint"
        );

        Ok(QuizEngine::from_parts(
            bank,
            config,
            state,
            checkpoint.answers,
            checkpoint.history,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> Vec<Question> {
        crate::quiz_bank! {
            "Q1" => ["a", "b", "c"], correct: 0;
            "Q2" => ["a", "b", "c"], correct: 1;
            "Q3" => ["a", "b", "c"], correct: 2;
        }
        .unwrap()
    }

    fn played_engine() -> QuizEngine {
        let mut engine = QuizEngine::new(bank()).unwrap();
        engine.select_option(0).unwrap();
        engine.confirm().unwrap();
        engine.advance().unwrap();
        engine.select_option(2).unwrap();
        engine.confirm().unwrap();
        engine
    }

    #[test]
    fn checkpoint_captures_run() {
        let engine = played_engine();
        let checkpoint = engine.checkpoint();

        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert_eq!(checkpoint.bank_len, 3);
        assert_eq!(checkpoint.lives_budget, 3);
        assert_eq!(checkpoint.state, engine.state());
        assert_eq!(checkpoint.answers.len(), 2);
        assert_eq!(checkpoint.history.transitions().len(), 3);
        assert!(Uuid::parse_str(&checkpoint.id).is_ok());
    }

    #[test]
    fn json_round_trip_resumes_run() {
        let engine = played_engine();
        let json = engine.checkpoint().to_json().unwrap();

        let checkpoint = Checkpoint::from_json(&json).unwrap();
        let mut resumed = QuizEngine::resume(bank(), QuizConfig::default(), checkpoint).unwrap();

        assert_eq!(resumed.state(), engine.state());
        assert_eq!(resumed.answers(), engine.answers());
        assert_eq!(resumed.is_correct_for_current(), Ok(false));

        resumed.advance().unwrap();
        assert_eq!(resumed.question_index(), 2);
    }

    #[test]
    fn binary_round_trip_preserves_checkpoint() {
        let checkpoint = played_engine().checkpoint();
        let bytes = checkpoint.to_bytes().unwrap();
        let decoded = Checkpoint::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, checkpoint);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut checkpoint = played_engine().checkpoint();
        checkpoint.version = 99;

        let result = QuizEngine::resume(bank(), QuizConfig::default(), checkpoint);
        assert!(matches!(
            result,
            Err(CheckpointError::UnsupportedVersion {
                found: 99,
                supported: 1
            })
        ));
    }

    #[test]
    fn different_bank_is_rejected() {
        let checkpoint = played_engine().checkpoint();
        let mut shorter = bank();
        shorter.pop();

        let result = QuizEngine::resume(shorter, QuizConfig::default(), checkpoint);
        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }

    #[test]
    fn different_lives_budget_is_rejected() {
        let checkpoint = played_engine().checkpoint();
        let config = QuizConfig {
            lives: 5,
            ..QuizConfig::default()
        };

        let result = QuizEngine::resume(bank(), config, checkpoint);
        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }

    #[test]
    fn empty_bank_is_rejected() {
        let checkpoint = played_engine().checkpoint();
        let result = QuizEngine::resume(Vec::new(), QuizConfig::default(), checkpoint);
        assert!(matches!(
            result,
            Err(CheckpointError::Bank(crate::engine::QuizError::EmptyBank))
        ));
    }

    #[test]
    fn tampered_state_lists_violations() {
        let mut json: serde_json::Value =
            serde_json::from_str(&played_engine().checkpoint().to_json().unwrap()).unwrap();
        json["state"]["score"] = serde_json::json!(9);
        json["state"]["lives"] = serde_json::json!(7);

        let checkpoint: Checkpoint = serde_json::from_value(json).unwrap();
        let err = QuizEngine::resume(bank(), QuizConfig::default(), checkpoint).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Score 9 exceeds"));
        assert!(message.contains("Lives 7 exceed the budget of 3"));
    }

    #[test]
    fn missing_answers_are_rejected() {
        let mut checkpoint = played_engine().checkpoint();
        checkpoint.answers.pop();

        let result = QuizEngine::resume(bank(), QuizConfig::default(), checkpoint);
        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }

    #[test]
    fn forged_answer_log_is_rejected() {
        let mut engine = QuizEngine::new(bank()).unwrap();
        engine.select_option(1).unwrap();
        engine.confirm().unwrap();

        let mut json: serde_json::Value =
            serde_json::from_str(&engine.checkpoint().to_json().unwrap()).unwrap();
        json["answers"][0] = serde_json::json!({
            "question_index": 7,
            "selected": 99,
            "correct": true
        });

        let checkpoint: Checkpoint = serde_json::from_value(json).unwrap();
        let err = QuizEngine::resume(bank(), QuizConfig::default(), checkpoint).unwrap_err();

        let message = err.to_string();
        assert!(matches!(err, CheckpointError::ValidationFailed(_)));
        assert!(message.contains("Answer 0 is recorded for question 7"));
        assert!(message.contains("Answer 0 selects option 99 of 3"));
        assert!(message.contains("1 correct answer(s), but the score is 0"));
    }

    #[test]
    fn flipped_answer_correctness_is_rejected() {
        let mut checkpoint = played_engine().checkpoint();
        checkpoint.answers[1].correct = true;

        let err = QuizEngine::resume(bank(), QuizConfig::default(), checkpoint).unwrap_err();
        assert!(err.to_string().contains("Answer 1 is marked true"));
    }

    #[test]
    fn history_out_of_step_is_rejected() {
        let mut engine = played_engine();
        let checkpoint = engine.checkpoint();
        engine.advance().unwrap();

        let mut stale = checkpoint.clone();
        stale.history = engine.history().clone();

        let err = QuizEngine::resume(bank(), QuizConfig::default(), stale).unwrap_err();
        assert!(err
            .to_string()
            .contains("History ends in Answering, but the state is in Feedback"));
        assert!(QuizEngine::resume(bank(), QuizConfig::default(), checkpoint).is_ok());
    }

    #[test]
    fn corrupt_bytes_fail_to_decode() {
        let result = Checkpoint::from_bytes(&[1, 2, 3]);
        assert!(matches!(
            result,
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }
}

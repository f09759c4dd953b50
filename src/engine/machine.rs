//! The quiz state machine.

use crate::config::QuizConfig;
use crate::core::{Phase, Question, QuizState, State, StateHistory, StateTransition};
use crate::engine::error::QuizError;
use crate::engine::feedback::{AnswerFeedback, AnswerRecord};
use crate::engine::grade::{percentage, GradeTier, QuizSummary};
use crate::enforcement::{check_bank, into_result};
use chrono::Utc;

/// Sole authority over a quiz run.
///
/// Commands take `&mut self` and either fully apply or leave the engine
/// untouched. Queries never mutate.
///
/// # Example
///
/// ```rust
/// use trivia_engine::core::{Phase, Question};
/// use trivia_engine::QuizEngine;
///
/// let bank = vec![Question::new("2 + 2?", ["3", "4"], 1).unwrap()];
/// let mut engine = QuizEngine::new(bank).unwrap();
///
/// engine.select_option(1).unwrap();
/// let state = engine.confirm().unwrap();
/// assert_eq!(state.score(), 1);
///
/// let state = engine.advance().unwrap();
/// assert_eq!(state.phase(), Phase::Finished);
/// assert_eq!(engine.final_percentage(), Ok(100));
/// ```
#[derive(Clone, Debug)]
pub struct QuizEngine {
    bank: Vec<Question>,
    config: QuizConfig,
    state: QuizState,
    answers: Vec<AnswerRecord>,
    history: StateHistory<Phase>,
}

impl QuizEngine {
    /// Create an engine with the default configuration.
    pub fn new(bank: Vec<Question>) -> Result<Self, QuizError> {
        Self::with_config(bank, QuizConfig::default())
    }

    /// Create an engine with a custom configuration.
    ///
    /// Fails with `EmptyBank` for zero questions and `MalformedBank` listing
    /// every violation when any question breaks the bank rules.
    pub fn with_config(bank: Vec<Question>, config: QuizConfig) -> Result<Self, QuizError> {
        Self::validate_inputs(&bank, &config)?;

        tracing::debug!(
            questions = bank.len(),
            lives = config.lives,
            "Created quiz engine"
        );

        Ok(Self {
            state: QuizState::initial(config.lives),
            bank,
            config,
            answers: Vec::new(),
            history: StateHistory::new(),
        })
    }

    pub(crate) fn validate_inputs(bank: &[Question], config: &QuizConfig) -> Result<(), QuizError> {
        if bank.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        into_result(check_bank(bank)).map_err(QuizError::MalformedBank)?;
        config
            .validate()
            .map_err(|e| QuizError::InvalidConfig(e.to_string()))
    }

    /// Rebuild an engine from already validated parts.
    pub(crate) fn from_parts(
        bank: Vec<Question>,
        config: QuizConfig,
        state: QuizState,
        answers: Vec<AnswerRecord>,
        history: StateHistory<Phase>,
    ) -> Self {
        Self {
            bank,
            config,
            state,
            answers,
            history,
        }
    }

    // ---- commands ----

    /// Tentatively choose option `index` for the current question.
    ///
    /// Re-selecting before confirming overwrites the previous choice.
    pub fn select_option(&mut self, index: usize) -> Result<QuizState, QuizError> {
        const OPERATION: &str = "select_option";
        self.ensure_phase(OPERATION, Phase::Answering)?;

        let options = self.current_question().option_count();
        if index >= options {
            return Err(self.reject(OPERATION, QuizError::InvalidSelection { index, options }));
        }

        self.state.selected_answer = Some(index);
        tracing::debug!(
            question = self.state.question_index,
            selected = index,
            "Selected option"
        );
        Ok(self.state)
    }

    /// Commit the selected answer and show feedback.
    ///
    /// A correct answer scores a point, an incorrect one costs a life.
    pub fn confirm(&mut self) -> Result<QuizState, QuizError> {
        const OPERATION: &str = "confirm";
        self.ensure_phase(OPERATION, Phase::Answering)?;

        let Some(selected) = self.state.selected_answer else {
            return Err(self.reject(OPERATION, QuizError::NoAnswerSelected));
        };

        let correct = self.current_question().is_correct(selected);
        if correct {
            self.state.score += 1;
        } else {
            self.state.lives = self.state.lives.saturating_sub(1);
        }

        self.answers.push(AnswerRecord {
            question_index: self.state.question_index,
            selected,
            correct,
        });
        self.enter(Phase::Feedback);

        tracing::debug!(
            question = self.state.question_index,
            correct,
            score = self.state.score,
            lives = self.state.lives,
            "Confirmed answer"
        );
        Ok(self.state)
    }

    /// Leave feedback: move to the next question, or finish the run when
    /// lives are exhausted or the last question was answered.
    pub fn advance(&mut self) -> Result<QuizState, QuizError> {
        self.ensure_phase("advance", Phase::Feedback)?;

        if self.state.lives == 0 || self.is_last_question() {
            self.enter(Phase::Finished);
            let percentage = percentage(self.state.score, self.bank.len());
            tracing::info!(
                score = self.state.score,
                total = self.bank.len(),
                percentage,
                tier = ?GradeTier::from_percentage(percentage, &self.config.grading),
                lives = self.state.lives,
                "Quiz finished"
            );
        } else {
            self.enter(Phase::Answering);
            self.state.question_index += 1;
            self.state.selected_answer = None;
        }

        Ok(self.state)
    }

    /// Start a new run over the same bank. Only valid once finished.
    pub fn restart(&mut self) -> Result<QuizState, QuizError> {
        const OPERATION: &str = "restart";
        if self.state.phase != Phase::Finished {
            let phase = self.state.phase;
            return Err(self.reject(
                OPERATION,
                QuizError::InvalidPhaseTransition {
                    operation: OPERATION,
                    phase,
                },
            ));
        }

        self.state = QuizState::initial(self.config.lives);
        self.answers.clear();
        self.history = StateHistory::new();

        tracing::info!(questions = self.bank.len(), "Quiz restarted");
        Ok(self.state)
    }

    // ---- queries ----

    pub fn current_question(&self) -> &Question {
        &self.bank[self.state.question_index]
    }

    /// `(question_index + 1) / len(bank)`, always in `(0, 1]`.
    pub fn progress_fraction(&self) -> f64 {
        (self.state.question_index + 1) as f64 / self.bank.len() as f64
    }

    /// Whether the confirmed answer is correct. Feedback phase only.
    pub fn is_correct_for_current(&self) -> Result<bool, QuizError> {
        self.ensure_view("is_correct_for_current", Phase::Feedback)?;
        self.feedback().map(|feedback| feedback.correct)
    }

    /// Highlighting data for the confirmed answer. Feedback phase only.
    pub fn feedback(&self) -> Result<AnswerFeedback, QuizError> {
        self.ensure_view("feedback", Phase::Feedback)?;

        let question = self.current_question();
        // Feedback always holds a selection.
        let selected = self.state.selected_answer.ok_or(QuizError::NoAnswerSelected)?;
        Ok(AnswerFeedback {
            selected,
            correct_index: question.correct_index(),
            correct: question.is_correct(selected),
        })
    }

    /// Rounded share of the bank answered correctly. Finished phase only.
    pub fn final_percentage(&self) -> Result<u32, QuizError> {
        self.ensure_view("final_percentage", Phase::Finished)?;
        Ok(percentage(self.state.score, self.bank.len()))
    }

    /// Tier of the final percentage. Finished phase only.
    pub fn grade_tier(&self) -> Result<GradeTier, QuizError> {
        let percentage = self.final_percentage()?;
        Ok(GradeTier::from_percentage(percentage, &self.config.grading))
    }

    /// Everything the result screen shows. Finished phase only.
    pub fn summary(&self) -> Result<QuizSummary, QuizError> {
        let percentage = self.final_percentage()?;
        Ok(QuizSummary {
            score: self.state.score,
            total: self.bank.len(),
            percentage,
            tier: GradeTier::from_percentage(percentage, &self.config.grading),
            lives_remaining: self.state.lives,
            elapsed: self.history.duration(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn lives_remaining(&self) -> u32 {
        self.state.lives
    }

    pub fn score_so_far(&self) -> u32 {
        self.state.score
    }

    pub fn selected_answer(&self) -> Option<usize> {
        self.state.selected_answer
    }

    pub fn question_index(&self) -> usize {
        self.state.question_index
    }

    /// Copy of the current state.
    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.phase.is_final()
    }

    pub fn is_last_question(&self) -> bool {
        self.state.question_index + 1 == self.bank.len()
    }

    /// Whether `confirm` would be accepted right now.
    pub fn can_confirm(&self) -> bool {
        self.state.phase == Phase::Answering && self.state.selected_answer.is_some()
    }

    pub fn bank(&self) -> &[Question] {
        &self.bank
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Answers confirmed in the current run, oldest first.
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// Phase changes of the current run.
    pub fn history(&self) -> &StateHistory<Phase> {
        &self.history
    }

    // ---- helpers ----

    fn ensure_phase(&self, operation: &'static str, required: Phase) -> Result<(), QuizError> {
        let phase = self.state.phase;
        if phase == required {
            return Ok(());
        }
        let error = if phase.is_final() {
            QuizError::QuizAlreadyFinished
        } else {
            QuizError::InvalidPhaseTransition { operation, phase }
        };
        Err(self.reject(operation, error))
    }

    fn ensure_view(&self, view: &'static str, required: Phase) -> Result<(), QuizError> {
        if self.state.phase == required {
            Ok(())
        } else {
            Err(QuizError::ViewUnavailable {
                view,
                phase: self.state.phase,
            })
        }
    }

    fn reject(&self, operation: &'static str, error: QuizError) -> QuizError {
        tracing::debug!(
            operation,
            phase = %self.state.phase,
            question = self.state.question_index,
            error = %error,
            "Rejected quiz command"
        );
        error
    }

    fn enter(&mut self, to: Phase) {
        let from = self.state.phase;
        self.history = self.history.record(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            question_index: self.state.question_index,
        });
        self.state.phase = to;
        tracing::debug!(
            from = from.name(),
            to = to.name(),
            question = self.state.question_index,
            "Phase transition"
        );
    }
}

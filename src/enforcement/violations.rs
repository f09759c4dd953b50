//! Violation errors reported by the validation rules.

use crate::core::Phase;
use thiserror::Error;

/// A way a question in a bank breaks the question rules.
///
/// `question` is the zero-based position of the offending question.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BankViolation {
    #[error("Question {question} has empty text")]
    EmptyText { question: usize },

    #[error("Question {question} has {found} option(s), at least 2 are required")]
    TooFewOptions { question: usize, found: usize },

    #[error("Question {question} option {option} is blank")]
    BlankOption { question: usize, option: usize },

    #[error("Question {question} repeats option text '{text}'")]
    DuplicateOption { question: usize, text: String },

    #[error("Question {question} correct index {index} is out of range for {options} option(s)")]
    CorrectIndexOutOfRange {
        question: usize,
        index: usize,
        options: usize,
    },
}

/// A way a `QuizState` breaks the run invariants for a given bank.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateViolation {
    #[error("Question index {index} is out of range for a bank of {bank_len}")]
    QuestionIndexOutOfRange { index: usize, bank_len: usize },

    #[error("Selected answer {selected} is out of range for {options} option(s)")]
    SelectionOutOfRange { selected: usize, options: usize },

    #[error("Score {score} exceeds the {answered} question(s) answered")]
    ScoreExceedsAnswered { score: u32, answered: usize },

    #[error("Lives {lives} exceed the budget of {budget}")]
    LivesAboveBudget { lives: u32, budget: u32 },

    #[error("Lives and score account for {accounted} answer(s), but {answered} were given")]
    AnswerCountMismatch { accounted: u64, answered: usize },

    #[error("Run is finished with lives left before the last question")]
    FinishedWithoutCause,

    #[error("Run is answering with no lives left")]
    AnsweringWithoutLives,

    #[error("Phase {phase} requires a selected answer")]
    MissingSelection { phase: Phase },

    #[error("Answer log holds {recorded} record(s), but {answered} question(s) were answered")]
    AnswerLogLength { recorded: usize, answered: usize },

    #[error("Answer {position} is recorded for question {question_index}")]
    AnswerOutOfOrder {
        position: usize,
        question_index: usize,
    },

    #[error("Answer {position} selects option {selected} of {options}")]
    AnswerSelectionOutOfRange {
        position: usize,
        selected: usize,
        options: usize,
    },

    #[error("Answer {position} is marked {recorded}, the bank says otherwise")]
    AnswerMarkedWrongly { position: usize, recorded: bool },

    #[error("Answer log holds {correct} correct answer(s), but the score is {score}")]
    AnswerScoreMismatch { correct: usize, score: u32 },

    #[error("Last answer selects {recorded:?}, but the state holds {selected:?}")]
    LastAnswerMismatch {
        recorded: Option<usize>,
        selected: Option<usize>,
    },

    #[error("History ends in {recorded}, but the state is in {phase}")]
    HistoryPhaseMismatch { recorded: Phase, phase: Phase },

    #[error("History enters feedback {entries} time(s) for {answers} answer(s)")]
    HistoryAnswerMismatch { entries: usize, answers: usize },
}

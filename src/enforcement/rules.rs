//! Validation rules for question banks and quiz states.

use crate::core::{Phase, Question, QuizState, StateHistory};
use crate::engine::AnswerRecord;
use crate::enforcement::violations::{BankViolation, StateViolation};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of the bank rules.
pub type BankValidation = Validation<(), NonEmptyVec<BankViolation>>;

/// Outcome of the state rules.
pub type StateValidation = Validation<(), NonEmptyVec<StateViolation>>;

/// Minimum number of options a question must offer.
pub const MIN_OPTIONS: usize = 2;

fn check(ok: bool, violation: impl FnOnce() -> BankViolation) -> BankValidation {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

fn check_state_rule(ok: bool, violation: impl FnOnce() -> StateViolation) -> StateValidation {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Check one question, accumulating ALL violations.
///
/// `position` is only used to label violations.
pub fn check_question(position: usize, question: &Question) -> BankValidation {
    let mut checks: Vec<BankValidation> = Vec::new();

    checks.push(check(!question.text.trim().is_empty(), || {
        BankViolation::EmptyText { question: position }
    }));

    let found = question.options.len();
    checks.push(check(found >= MIN_OPTIONS, || BankViolation::TooFewOptions {
        question: position,
        found,
    }));

    let mut seen = HashSet::new();
    for (option, text) in question.options.iter().enumerate() {
        let trimmed = text.trim();
        checks.push(check(!trimmed.is_empty(), || BankViolation::BlankOption {
            question: position,
            option,
        }));
        if !trimmed.is_empty() {
            checks.push(check(seen.insert(trimmed), || {
                BankViolation::DuplicateOption {
                    question: position,
                    text: trimmed.to_string(),
                }
            }));
        }
    }

    checks.push(check(question.correct_index < found, || {
        BankViolation::CorrectIndexOutOfRange {
            question: position,
            index: question.correct_index,
            options: found,
        }
    }));

    Validation::all_vec(checks).map(|_| ())
}

/// Check every question of a bank, accumulating ALL violations.
///
/// An empty bank passes; emptiness is reported separately by callers.
pub fn check_bank(bank: &[Question]) -> BankValidation {
    let checks: Vec<BankValidation> = bank
        .iter()
        .enumerate()
        .map(|(position, question)| check_question(position, question))
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// Number of questions confirmed so far in `state`'s run.
pub(crate) fn answered_questions(state: &QuizState) -> usize {
    match state.phase {
        Phase::Answering => state.question_index,
        Phase::Feedback | Phase::Finished => state.question_index + 1,
    }
}

/// Check a quiz state against the run invariants for `bank`.
///
/// Verifies that lives and score together account for every confirmed
/// answer, so a state that passes is reachable from the initial state.
pub fn check_state(state: &QuizState, bank: &[Question], lives_budget: u32) -> StateValidation {
    let bank_len = bank.len();
    let Some(question) = bank.get(state.question_index) else {
        return Validation::fail(StateViolation::QuestionIndexOutOfRange {
            index: state.question_index,
            bank_len,
        });
    };

    let mut checks: Vec<StateValidation> = Vec::new();

    if let Some(selected) = state.selected_answer {
        let options = question.options.len();
        checks.push(check_state_rule(selected < options, || {
            StateViolation::SelectionOutOfRange { selected, options }
        }));
    }

    let answered = answered_questions(state);

    checks.push(check_state_rule(state.score as usize <= answered, || {
        StateViolation::ScoreExceedsAnswered {
            score: state.score,
            answered,
        }
    }));

    if state.lives > lives_budget {
        checks.push(Validation::fail(StateViolation::LivesAboveBudget {
            lives: state.lives,
            budget: lives_budget,
        }));
    } else {
        let accounted = u64::from(state.score) + u64::from(lives_budget - state.lives);
        checks.push(check_state_rule(accounted == answered as u64, || {
            StateViolation::AnswerCountMismatch {
                accounted,
                answered,
            }
        }));
    }

    match state.phase {
        Phase::Answering => {
            checks.push(check_state_rule(state.lives > 0, || {
                StateViolation::AnsweringWithoutLives
            }));
        }
        Phase::Feedback => {
            checks.push(check_state_rule(state.selected_answer.is_some(), || {
                StateViolation::MissingSelection {
                    phase: state.phase,
                }
            }));
        }
        Phase::Finished => {
            let last = state.question_index + 1 == bank_len;
            checks.push(check_state_rule(state.lives == 0 || last, || {
                StateViolation::FinishedWithoutCause
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Check the answer log and history of a run against its state and bank.
///
/// Every record must sit at its own question, pick an existing option and
/// carry the correctness the bank gives it. Correct records must add up to
/// the score, and the history must end in the state's phase with one
/// feedback entry per answer.
pub fn check_answer_log(
    state: &QuizState,
    answers: &[AnswerRecord],
    history: &StateHistory<Phase>,
    bank: &[Question],
) -> StateValidation {
    let mut checks: Vec<StateValidation> = Vec::new();

    let answered = answered_questions(state);
    checks.push(check_state_rule(answers.len() == answered, || {
        StateViolation::AnswerLogLength {
            recorded: answers.len(),
            answered,
        }
    }));

    for (position, record) in answers.iter().enumerate() {
        checks.push(check_state_rule(record.question_index == position, || {
            StateViolation::AnswerOutOfOrder {
                position,
                question_index: record.question_index,
            }
        }));

        // Records past the bank are already counted by the length rule.
        let Some(question) = bank.get(position) else {
            continue;
        };
        let options = question.options.len();
        if record.selected < options {
            checks.push(check_state_rule(
                record.correct == question.is_correct(record.selected),
                || StateViolation::AnswerMarkedWrongly {
                    position,
                    recorded: record.correct,
                },
            ));
        } else {
            checks.push(Validation::fail(StateViolation::AnswerSelectionOutOfRange {
                position,
                selected: record.selected,
                options,
            }));
        }
    }

    let correct = answers.iter().filter(|record| record.correct).count();
    checks.push(check_state_rule(correct == state.score as usize, || {
        StateViolation::AnswerScoreMismatch {
            correct,
            score: state.score,
        }
    }));

    if state.phase != Phase::Answering {
        let recorded = answers.last().map(|record| record.selected);
        checks.push(check_state_rule(recorded == state.selected_answer, || {
            StateViolation::LastAnswerMismatch {
                recorded,
                selected: state.selected_answer,
            }
        }));
    }

    let recorded = history.get_path().last().map_or(Phase::Answering, |phase| **phase);
    checks.push(check_state_rule(recorded == state.phase, || {
        StateViolation::HistoryPhaseMismatch {
            recorded,
            phase: state.phase,
        }
    }));

    let entries = history.count_entries(&Phase::Feedback);
    checks.push(check_state_rule(entries == answers.len(), || {
        StateViolation::HistoryAnswerMismatch {
            entries,
            answers: answers.len(),
        }
    }));

    Validation::all_vec(checks).map(|_| ())
}

//! Builder for constructing question banks.

use crate::builder::error::BuildError;
use crate::builder::question::QuestionBuilder;
use crate::core::Question;
use crate::enforcement::{check_bank, into_result};

/// Builder for constructing an ordered question bank.
#[derive(Clone, Debug, Default)]
pub struct BankBuilder {
    questions: Vec<Question>,
}

impl BankBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a question using a builder.
    /// Returns an error if the builder fails validation.
    pub fn question(mut self, builder: QuestionBuilder) -> Result<Self, BuildError> {
        let question = builder.build_at(self.questions.len())?;
        self.questions.push(question);
        Ok(self)
    }

    /// Add a pre-built question.
    pub fn add_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Add multiple questions at once.
    pub fn questions(mut self, questions: Vec<Question>) -> Self {
        self.questions.extend(questions);
        self
    }

    /// Build the bank.
    /// Returns an error if the bank is empty or any question is malformed.
    pub fn build(self) -> Result<Vec<Question>, BuildError> {
        if self.questions.is_empty() {
            return Err(BuildError::EmptyBank);
        }

        into_result(check_bank(&self.questions)).map_err(BuildError::InvalidQuestion)?;
        Ok(self.questions)
    }
}

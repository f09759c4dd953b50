//! Builder for constructing questions.

use crate::builder::error::BuildError;
use crate::core::Question;
use crate::enforcement::{check_question, into_result};

/// Builder for constructing questions with a fluent API.
///
/// # Example
///
/// ```
/// use trivia_engine::builder::QuestionBuilder;
///
/// let question = QuestionBuilder::new()
///     .text("Which component shows a single choice?")
///     .option("Checkbox")
///     .correct_option("RadioButton")
///     .option("Switch")
///     .build()
///     .unwrap();
///
/// assert_eq!(question.correct_index(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct QuestionBuilder {
    text: Option<String>,
    options: Vec<String>,
    correct: Option<usize>,
}

impl QuestionBuilder {
    /// Create a new question builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prompt (required).
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append one option.
    pub fn option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Append several options in order.
    pub fn options<I, O>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<String>,
    {
        self.options.extend(options.into_iter().map(Into::into));
        self
    }

    /// Mark the option at `index` as correct.
    pub fn correct(mut self, index: usize) -> Self {
        self.correct = Some(index);
        self
    }

    /// Append an option and mark it as correct.
    pub fn correct_option(mut self, option: impl Into<String>) -> Self {
        self.correct = Some(self.options.len());
        self.options.push(option.into());
        self
    }

    /// Build the question.
    pub fn build(self) -> Result<Question, BuildError> {
        self.build_at(0)
    }

    /// Build the question, labelling violations with its bank position.
    pub(crate) fn build_at(self, position: usize) -> Result<Question, BuildError> {
        let text = self.text.ok_or(BuildError::MissingText)?;
        let correct_index = self.correct.ok_or(BuildError::MissingCorrectIndex)?;

        let question = Question {
            text,
            options: self.options,
            correct_index,
        };

        into_result(check_question(position, &question)).map_err(BuildError::InvalidQuestion)?;
        Ok(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enforcement::BankViolation;

    #[test]
    fn builder_validates_required_fields() {
        let result = QuestionBuilder::new().options(["a", "b"]).correct(0).build();
        assert_eq!(result, Err(BuildError::MissingText));

        let result = QuestionBuilder::new().text("Q").options(["a", "b"]).build();
        assert_eq!(result, Err(BuildError::MissingCorrectIndex));
    }

    #[test]
    fn fluent_api_builds_question() {
        let question = QuestionBuilder::new()
            .text("Which function starts the UI?")
            .correct_option("setContent")
            .options(["onCreate", "build"])
            .build()
            .unwrap();

        assert_eq!(question.text(), "Which function starts the UI?");
        assert_eq!(question.options(), ["setContent", "onCreate", "build"]);
        assert_eq!(question.correct_index(), 0);
    }

    #[test]
    fn builder_reports_all_violations() {
        let result = QuestionBuilder::new()
            .text("Q")
            .option("only")
            .correct(3)
            .build();

        match result {
            Err(BuildError::InvalidQuestion(violations)) => {
                assert_eq!(violations.len(), 2);
                assert!(violations.contains(&BankViolation::TooFewOptions {
                    question: 0,
                    found: 1
                }));
            }
            other => panic!("Expected InvalidQuestion, got {:?}", other),
        }
    }

    #[test]
    fn error_message_lists_violations() {
        let err = QuestionBuilder::new()
            .text("")
            .options(["a", "b"])
            .correct(0)
            .build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Question failed validation: Question 0 has empty text"
        );
    }
}

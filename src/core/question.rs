//! Question type.

use serde::{Deserialize, Serialize};

/// A single multiple-choice question.
///
/// Questions are immutable once built. Use [`crate::builder::QuestionBuilder`]
/// or [`Question::new`] to construct validated questions; deserialized
/// questions are validated when a bank is handed to the engine.
///
/// # Example
///
/// ```rust
/// use trivia_engine::core::Question;
///
/// let question = Question::new("2 + 2?", ["3", "4"], 1).unwrap();
/// assert_eq!(question.correct_option(), Some("4"));
/// assert!(question.is_correct(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub(crate) text: String,
    pub(crate) options: Vec<String>,
    pub(crate) correct_index: usize,
}

impl Question {
    /// Build a question, rejecting it if it breaks any bank rule.
    pub fn new<T, I, O>(
        text: T,
        options: I,
        correct_index: usize,
    ) -> Result<Self, crate::builder::BuildError>
    where
        T: Into<String>,
        I: IntoIterator<Item = O>,
        O: Into<String>,
    {
        crate::builder::QuestionBuilder::new()
            .text(text)
            .options(options)
            .correct(correct_index)
            .build()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Text of the correct option, `None` only for malformed questions.
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }

    /// Whether `index` names the correct option.
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

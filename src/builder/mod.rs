//! Builder API for question banks.
//!
//! Fluent builders and a macro for declaring banks with minimal boilerplate.
//! Everything built here has passed the bank rules in
//! [`crate::enforcement`].

pub mod bank;
pub mod error;
pub mod macros;
pub mod question;

pub use bank::BankBuilder;
pub use error::BuildError;
pub use question::QuestionBuilder;

use crate::core::Question;

fn entry(text: &str, options: [&str; 4], correct_index: usize) -> Question {
    Question {
        text: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_index,
    }
}

/// The sixteen-question Jetpack Compose bank shipped with the trivia screen.
///
/// # Example
///
/// ```
/// use trivia_engine::builder::builtin_bank;
/// use trivia_engine::QuizEngine;
///
/// let engine = QuizEngine::new(builtin_bank()).unwrap();
/// assert_eq!(engine.bank().len(), 16);
/// ```
pub fn builtin_bank() -> Vec<Question> {
    vec![
        entry(
            "Which language does Jetpack Compose use?",
            ["Java", "Kotlin", "Swift", "Python"],
            1,
        ),
        entry(
            "Which component displays lists?",
            ["RecyclerView", "LazyColumn", "ListView", "Grid"],
            1,
        ),
        entry(
            "Which annotation defines UI?",
            ["@Composable", "@View", "@Screen", "@UI"],
            0,
        ),
        entry(
            "What keeps state across rotation?",
            ["remember", "rememberSaveable", "var", "lateinit"],
            1,
        ),
        entry(
            "Which layout is vertical?",
            ["Row", "Box", "Column", "Stack"],
            2,
        ),
        entry(
            "Which design library does Compose use?",
            ["Material3", "Bootstrap", "UIKit", "Flutter"],
            0,
        ),
        entry(
            "Which function starts the UI?",
            ["setContent", "onCreate", "build", "startUI"],
            0,
        ),
        entry(
            "Which component has a top bar?",
            ["Scaffold", "Column", "LazyRow", "Card"],
            0,
        ),
        entry(
            "What shows a single choice?",
            ["Checkbox", "RadioButton", "Switch", "Slider"],
            1,
        ),
        entry(
            "Which structure repeats elements?",
            ["LazyColumn", "Box", "Spacer", "Padding"],
            0,
        ),
        entry(
            "What holds an observable list?",
            ["ArrayList", "mutableStateListOf", "List", "Map"],
            1,
        ),
        entry(
            "What handles simple navigation?",
            ["Intent", "Router", "Link", "URL"],
            0,
        ),
        entry(
            "Which layout aligns horizontally?",
            ["Column", "Box", "Row", "Stack"],
            2,
        ),
        entry(
            "What displays text?",
            ["Text", "Label", "Paragraph", "Span"],
            0,
        ),
        entry(
            "What allows efficient scrolling?",
            ["LazyColumn", "Column", "Box", "GridLayout"],
            0,
        ),
        entry(
            "Which component shows buttons in Compose?",
            ["Text", "Button", "Image", "Spacer"],
            1,
        ),
    ]
}

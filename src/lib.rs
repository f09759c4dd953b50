//! Trivia Engine: a pure state machine for trivia quizzes
//!
//! The engine owns a fixed question bank and walks a run through
//! `Answering -> Feedback -> Answering | Finished`, keeping score, a lives
//! budget and the player's tentative selection in one `QuizState`. The host
//! renders from engine queries and forwards user actions as commands; the
//! engine performs no I/O.
//!
//! # Modules
//!
//! - [`core`]: phases, questions, the `QuizState` snapshot, history
//! - [`engine`]: the `QuizEngine` state machine and its views
//! - [`builder`]: fluent builders, the `quiz_bank!` macro, the builtin bank
//! - [`enforcement`]: validation rules that report every violation at once
//! - [`config`]: lives budget and grade thresholds
//! - [`checkpoint`]: serializable snapshots for process-restart recovery
//! - [`todo`]: id-keyed todo list
//!
//! # Example
//!
//! ```rust
//! use trivia_engine::core::Phase;
//! use trivia_engine::engine::GradeTier;
//! use trivia_engine::{quiz_bank, QuizEngine};
//!
//! let bank = quiz_bank! {
//!     "Which language does Jetpack Compose use?" => ["Java", "Kotlin"], correct: 1;
//!     "Which layout is vertical?" => ["Row", "Column"], correct: 1;
//! }
//! .unwrap();
//!
//! let mut engine = QuizEngine::new(bank).unwrap();
//!
//! engine.select_option(1).unwrap();
//! engine.confirm().unwrap();
//! engine.advance().unwrap();
//!
//! engine.select_option(0).unwrap();
//! engine.confirm().unwrap();
//! assert_eq!(engine.is_correct_for_current(), Ok(false));
//!
//! engine.advance().unwrap();
//! assert_eq!(engine.phase(), Phase::Finished);
//! assert_eq!(engine.final_percentage(), Ok(50));
//! assert_eq!(engine.grade_tier(), Ok(GradeTier::Mid));
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod enforcement;
pub mod engine;
pub mod todo;

// Re-export commonly used types
pub use builder::{builtin_bank, BankBuilder, BuildError, QuestionBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use config::QuizConfig;
pub use self::core::{Phase, Question, QuizState, State};
pub use engine::{GradeTier, QuizError, QuizEngine};

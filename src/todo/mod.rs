//! Todo list store shipped next to the quiz engine.
//!
//! Items are addressed by id, never by value, so two items with the same
//! text cannot be confused.

mod store;

pub use store::{TodoError, TodoItem, TodoStore};

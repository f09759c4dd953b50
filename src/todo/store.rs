//! Id-keyed todo list.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors reported by [`TodoStore`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("Todo text is empty")]
    EmptyText,

    #[error("No todo with id {0}")]
    UnknownId(u64),

    #[error("Todo stored under key {key} carries id {id}")]
    KeyMismatch { key: u64, id: u64 },
}

/// A single todo entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
    pub done: bool,
}

/// Ordered todo list keyed by id.
///
/// Ids only grow, so id order is insertion order. An id is never handed out
/// twice, even after the item holding the highest id is removed.
///
/// # Example
///
/// ```rust
/// use trivia_engine::todo::TodoStore;
///
/// let mut todos = TodoStore::new();
/// let milk = todos.add("buy milk").unwrap();
/// let mail = todos.add("  answer mail ").unwrap();
/// todos.toggle_done(milk).unwrap();
///
/// assert_eq!(todos.pending().map(|t| t.text.as_str()).collect::<Vec<_>>(), ["answer mail"]);
/// assert_eq!(todos.completed().map(|t| t.id).collect::<Vec<_>>(), [milk]);
/// assert_eq!(mail, 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredTodos")]
pub struct TodoStore {
    items: BTreeMap<u64, TodoItem>,
    last_id: u64,
}

/// Serialized shape of a [`TodoStore`], checked before it becomes one.
#[derive(Deserialize)]
struct StoredTodos {
    items: BTreeMap<u64, TodoItem>,
    last_id: u64,
}

impl TryFrom<StoredTodos> for TodoStore {
    type Error = TodoError;

    fn try_from(stored: StoredTodos) -> Result<Self, Self::Error> {
        if let Some((&key, item)) = stored.items.iter().find(|(key, item)| **key != item.id) {
            return Err(TodoError::KeyMismatch { key, id: item.id });
        }

        // A counter behind the stored ids would hand one of them out again.
        let max_existing = stored.items.keys().next_back().copied().unwrap_or(0);
        Ok(Self {
            last_id: stored.last_id.max(max_existing),
            items: stored.items,
        })
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pending item with trimmed `text`, returning its id.
    pub fn add(&mut self, text: impl AsRef<str>) -> Result<u64, TodoError> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return Err(TodoError::EmptyText);
        }

        let max_existing = self.items.keys().next_back().copied().unwrap_or(0);
        let id = max_existing.max(self.last_id) + 1;
        self.last_id = id;
        self.items.insert(
            id,
            TodoItem {
                id,
                text: text.to_string(),
                done: false,
            },
        );

        tracing::debug!(id, "Added todo");
        Ok(id)
    }

    /// Flip the done flag of `id`, returning the updated item.
    pub fn toggle_done(&mut self, id: u64) -> Result<&TodoItem, TodoError> {
        let item = self.items.get_mut(&id).ok_or(TodoError::UnknownId(id))?;
        item.done = !item.done;
        tracing::debug!(id, done = item.done, "Toggled todo");
        Ok(item)
    }

    /// Remove `id`, returning the removed item.
    pub fn remove(&mut self, id: u64) -> Result<TodoItem, TodoError> {
        let item = self.items.remove(&id).ok_or(TodoError::UnknownId(id))?;
        tracing::debug!(id, "Removed todo");
        Ok(item)
    }

    pub fn get(&self, id: u64) -> Option<&TodoItem> {
        self.items.get(&id)
    }

    /// All items in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &TodoItem> {
        self.items.values()
    }

    /// Items not yet done, in insertion order.
    pub fn pending(&self) -> impl Iterator<Item = &TodoItem> {
        self.items.values().filter(|item| !item.done)
    }

    /// Items done, in insertion order.
    pub fn completed(&self) -> impl Iterator<Item = &TodoItem> {
        self.items.values().filter(|item| item.done)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_id_is_one() {
        let mut store = TodoStore::new();
        assert_eq!(store.add("a"), Ok(1));
        assert_eq!(store.add("b"), Ok(2));
    }

    #[test]
    fn blank_text_is_rejected() {
        let mut store = TodoStore::new();
        assert_eq!(store.add("   "), Err(TodoError::EmptyText));
        assert!(store.is_empty());
    }

    #[test]
    fn text_is_trimmed() {
        let mut store = TodoStore::new();
        let id = store.add("  walk dog \n").unwrap();
        assert_eq!(store.get(id).unwrap().text, "walk dog");
    }

    #[test]
    fn ids_are_never_reused() {
        let mut store = TodoStore::new();
        store.add("a").unwrap();
        let b = store.add("b").unwrap();
        store.remove(b).unwrap();

        assert_eq!(store.add("c"), Ok(3));
    }

    #[test]
    fn identical_texts_stay_distinct() {
        let mut store = TodoStore::new();
        let first = store.add("same").unwrap();
        let second = store.add("same").unwrap();

        store.remove(first).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(second).unwrap().text, "same");
    }

    #[test]
    fn toggle_flips_done() {
        let mut store = TodoStore::new();
        let id = store.add("a").unwrap();

        assert!(store.toggle_done(id).unwrap().done);
        assert!(!store.toggle_done(id).unwrap().done);
    }

    #[test]
    fn unknown_ids_are_reported() {
        let mut store = TodoStore::new();
        assert_eq!(store.toggle_done(4).unwrap_err(), TodoError::UnknownId(4));
        assert_eq!(store.remove(4), Err(TodoError::UnknownId(4)));
    }

    #[test]
    fn projections_keep_insertion_order() {
        let mut store = TodoStore::new();
        let a = store.add("a").unwrap();
        let b = store.add("b").unwrap();
        let c = store.add("c").unwrap();
        let d = store.add("d").unwrap();
        store.toggle_done(c).unwrap();
        store.toggle_done(a).unwrap();

        let pending: Vec<u64> = store.pending().map(|t| t.id).collect();
        let completed: Vec<u64> = store.completed().map(|t| t.id).collect();
        let all: Vec<u64> = store.list().map(|t| t.id).collect();

        assert_eq!(pending, vec![b, d]);
        assert_eq!(completed, vec![a, c]);
        assert_eq!(all, vec![a, b, c, d]);
    }

    #[test]
    fn store_serializes_with_id_counter() {
        let mut store = TodoStore::new();
        store.add("a").unwrap();
        let b = store.add("b").unwrap();
        store.remove(b).unwrap();

        let json = serde_json::to_string(&store).unwrap();
        let mut restored: TodoStore = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, store);
        assert_eq!(restored.add("c"), Ok(3));
    }

    #[test]
    fn mismatched_keys_fail_to_deserialize() {
        let json = r#"{"items":{"1":{"id":9,"text":"a","done":false}},"last_id":9}"#;
        let err = serde_json::from_str::<TodoStore>(json).unwrap_err();
        assert!(err.to_string().contains("key 1 carries id 9"));
    }

    #[test]
    fn stale_counter_is_raised_on_load() {
        let json = r#"{"items":{"4":{"id":4,"text":"a","done":false}},"last_id":1}"#;
        let mut store: TodoStore = serde_json::from_str(json).unwrap();

        assert_eq!(store.add("b"), Ok(5));
        assert_eq!(store.list().map(|t| t.id).collect::<Vec<_>>(), vec![4, 5]);
    }
}

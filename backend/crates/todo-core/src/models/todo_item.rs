//! ToDo entity - the single persisted record of the API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task with a title and a completion flag.
///
/// The title of a persisted item is always 1..=200 characters; callers
/// validate before constructing one for a write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Assigned on creation, never changes afterwards
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
}

impl TodoItem {
    /// Create a new, not yet completed item with a fresh identifier
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            completed: false,
        }
    }

    /// Overwrite the mutable fields with the values of an update
    pub fn apply_update(&mut self, title: impl Into<String>, completed: bool) {
        self.title = title.into();
        self.completed = completed;
    }
}

use crate::TodoItem;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outbound projection of a [`TodoItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoView {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
}

impl From<&TodoItem> for TodoView {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            completed: item.completed,
        }
    }
}

impl From<TodoItem> for TodoView {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            completed: item.completed,
        }
    }
}

use serde::{Deserialize, Serialize};

/// Full replacement of an item's mutable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    /// Validated exactly like [`crate::CreateTodoRequest::title`]
    #[serde(default)]
    pub title: Option<String>,

    /// Omitted means "not completed"
    #[serde(default)]
    pub completed: bool,
}

impl UpdateTodoRequest {
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: Some(title.into()),
            completed,
        }
    }
}

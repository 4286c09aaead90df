use todo_core::TodoView;

use serde::Serialize;

/// Single todo response
#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub todo: TodoView,
    /// Confirmation text, set on creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

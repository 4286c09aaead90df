pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    todos::{
        list_todos_query::ListTodosQuery,
        todo_list_response::TodoListResponse,
        todo_response::TodoResponse,
        todos::{create_todo, delete_todo, get_todo, list_todos, update_todo},
    },
};
pub use app_state::{AppState, SessionTodoService};

pub use crate::routes::build_router;

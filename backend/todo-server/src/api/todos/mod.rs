pub mod list_todos_query;
pub mod reply;
pub mod todo_list_response;
pub mod todo_response;
pub mod todos;

mod error;
mod list_todos_query;
mod reply;

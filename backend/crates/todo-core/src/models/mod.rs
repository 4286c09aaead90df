pub mod create_todo_request;
pub mod todo_item;
pub mod todo_view;
pub mod update_todo_request;

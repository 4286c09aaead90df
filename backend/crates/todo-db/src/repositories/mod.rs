pub mod todo_session;

pub mod error;
pub mod todos;

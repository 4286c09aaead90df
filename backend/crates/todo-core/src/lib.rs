pub mod models;
pub mod response;
pub mod service;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use models::create_todo_request::CreateTodoRequest;
pub use models::todo_item::TodoItem;
pub use models::todo_view::TodoView;
pub use models::update_todo_request::UpdateTodoRequest;
pub use response::service_response::ServiceResponse;
pub use response::service_status::ServiceStatus;
pub use service::todo_service::TodoService;
pub use store::{TodoStore, UnitOfWork};
pub use validation::{DEFAULT_MAX_TITLE_LENGTH, FieldViolation, TitleRules, ValidationErrors};

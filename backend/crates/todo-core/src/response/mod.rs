pub mod service_response;
pub mod service_status;

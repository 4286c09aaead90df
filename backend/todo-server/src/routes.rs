use crate::api::error::ApiError;
use crate::{AppState, create_todo, delete_todo, get_todo, health, list_todos, update_todo};

use std::any::Any;
use std::time::Duration;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let handler_timeout = state.handler_timeout;

    let router = Router::new()
        // ToDo endpoints
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state);

    with_middleware(router, handler_timeout)
}

/// Wrap a router in the request-handling middleware stack.
///
/// A request running past `handler_timeout` is dropped with 408, which also
/// drops its database session and rolls back anything uncommitted.
pub fn with_middleware(router: Router, handler_timeout: Duration) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            handler_timeout,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        )
}

pub(crate) fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    ApiError::internal(format!("Handler panicked: {}", detail)).into_response()
}

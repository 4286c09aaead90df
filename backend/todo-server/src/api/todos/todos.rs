//! ToDo REST API handlers
//!
//! Each handler builds a request-scoped service, hands it the decoded
//! input and turns the resulting envelope into a response.

use crate::api::todos::reply::into_http;
use crate::{ApiError, ApiResult, AppState, ListTodosQuery, TodoListResponse, TodoResponse};

use todo_core::{CreateTodoRequest, UpdateTodoRequest};

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderValue, header},
    response::Response,
};
use uuid::Uuid;

const TODOS_ROUTE: &str = "/api/todos";

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/todos
///
/// An unreadable body reaches the service as an absent request.
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let request = body.ok().map(|Json(request)| request);

    let reply = state.todo_service_for_writes().create(request).await?;
    let location = reply
        .payload()
        .map(|todo| format!("{}/{}", TODOS_ROUTE, todo.id));

    let mut response = into_http(reply, |todo, message| TodoResponse { todo, message })?;

    if let Some(location) = location {
        let value = HeaderValue::try_from(location)
            .map_err(|e| ApiError::internal(format!("Invalid Location header: {}", e)))?;
        response.headers_mut().insert(header::LOCATION, value);
    }

    Ok(response)
}

/// GET /api/todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let todo_id = Uuid::parse_str(&id)?;

    let reply = state.todo_service().get(todo_id).await?;

    into_http(reply, |todo, _| TodoResponse {
        todo,
        message: None,
    })
}

/// GET /api/todos?pageSize=N
pub async fn list_todos(
    State(state): State<AppState>,
    query: Result<Query<ListTodosQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let query = query.map(|Query(q)| q).unwrap_or_default();

    let reply = state.todo_service().list(query.page_size()).await?;

    into_http(reply, |todos, _| TodoListResponse { todos })
}

/// PUT /api/todos/{id}
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let todo_id = Uuid::parse_str(&id)?;
    let request = body.ok().map(|Json(request)| request);

    let reply = state.todo_service_for_writes().update(todo_id, request).await?;

    into_http(reply, |todo, _| TodoResponse {
        todo,
        message: None,
    })
}

/// DELETE /api/todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let todo_id = Uuid::parse_str(&id)?;

    let reply = state.todo_service_for_writes().delete(todo_id).await?;

    into_http(reply, |todo, _| TodoResponse {
        todo,
        message: None,
    })
}

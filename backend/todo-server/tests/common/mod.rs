#![allow(dead_code)]

//! Test infrastructure for todo-server API tests

use todo_core::{TitleRules, TodoItem, TodoStore, UnitOfWork};
use todo_db::SqliteTodoSession;
use todo_server::AppState;

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    todo_db::connect_in_memory()
        .await
        .expect("Failed to create test database")
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState::new(
        create_test_pool().await,
        TitleRules::default(),
        Duration::from_secs(30),
    )
}

/// Insert a committed todo directly through a session
pub async fn create_test_todo(pool: &SqlitePool, title: &str, completed: bool) -> TodoItem {
    let mut item = TodoItem::new(title);
    item.completed = completed;

    let session = SqliteTodoSession::new(pool.clone());
    session.create(&item).await.expect("Failed to create todo");
    session.commit().await.expect("Failed to commit todo");

    item
}

pub async fn count_todos(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM todos")
        .fetch_one(pool)
        .await
        .expect("Failed to count todos")
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send one request through a clone of the router
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

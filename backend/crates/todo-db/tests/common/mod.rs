#![allow(dead_code)]

use todo_core::{TodoItem, TodoStore, UnitOfWork};
use todo_db::{SqliteTodoSession, connect_in_memory};

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Persists the given items in one committed session
pub async fn seed(pool: &SqlitePool, items: &[TodoItem]) {
    let session = SqliteTodoSession::new(pool.clone());
    for item in items {
        session.create(item).await.expect("Failed to seed item");
    }
    session.commit().await.expect("Failed to commit seed");
}

/// Counts rows directly, outside of any session
pub async fn count_rows(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM todos")
        .fetch_one(pool)
        .await
        .expect("Failed to count todos")
}

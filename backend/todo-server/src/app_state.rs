use todo_core::{TitleRules, TodoService};
use todo_db::SqliteTodoSession;

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

/// Service wired to one database session.
pub type SessionTodoService = TodoService<SqliteTodoSession, SqliteTodoSession>;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub title_rules: TitleRules,
    pub handler_timeout: Duration,
}

impl AppState {
    pub fn new(pool: SqlitePool, title_rules: TitleRules, handler_timeout: Duration) -> Self {
        Self {
            pool,
            title_rules,
            handler_timeout,
        }
    }

    /// Build a service for a single read-only request.
    ///
    /// Store and unit of work share one session, so the request's reads and
    /// writes run in the same transaction. Dropping the service without a
    /// commit rolls that transaction back.
    pub fn todo_service(&self) -> SessionTodoService {
        self.service_over(SqliteTodoSession::new(self.pool.clone()))
    }

    /// Build a service for a single request that creates, updates or deletes.
    pub fn todo_service_for_writes(&self) -> SessionTodoService {
        self.service_over(SqliteTodoSession::for_writes(self.pool.clone()))
    }

    fn service_over(&self, session: SqliteTodoSession) -> SessionTodoService {
        let session = Arc::new(session);
        TodoService::new(Arc::clone(&session), session, self.title_rules)
    }
}

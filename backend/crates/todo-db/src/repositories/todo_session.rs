//! SQLite-backed store and unit of work for one request.
//!
//! ## Transaction lifetime
//!
//! The session opens a transaction on its first statement and keeps every
//! later read and write of the request on it. `commit()` finalises and
//! releases it. A session dropped before `commit()` (client disconnect,
//! handler timeout, error after a write) rolls the transaction back, so a
//! cancelled request never leaves a partial write behind.
//!
//! A session built with [`SqliteTodoSession::for_writes`] begins with
//! `BEGIN IMMEDIATE` and takes the write lock up front. Its read-then-write
//! requests wait on the busy timeout for a concurrent writer instead of
//! failing with `SQLITE_BUSY_SNAPSHOT` when upgrading a stale read.

use crate::{DbError, Result as DbErrorResult};

use todo_core::{TodoItem, TodoStore, UnitOfWork};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::debug;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tokio::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// SQLite treats a negative LIMIT as "no limit"
const UNLIMITED: i64 = -1;

const BEGIN_IMMEDIATE: &str = "BEGIN IMMEDIATE";

#[derive(sqlx::FromRow)]
pub(crate) struct TodoRow {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) completed: bool,
}

impl TryFrom<TodoRow> for TodoItem {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: TodoRow) -> DbErrorResult<Self> {
        let id = Uuid::parse_str(&row.id).map_err(|e| DbError::CorruptRow {
            table: "todos",
            message: format!("Invalid UUID in todos.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(TodoItem {
            id,
            title: row.title,
            completed: row.completed,
        })
    }
}

#[derive(Default)]
struct SessionState {
    transaction: Option<Transaction<'static, Sqlite>>,
    affected_rows: u64,
}

pub struct SqliteTodoSession {
    pool: SqlitePool,
    writes: bool,
    state: Mutex<SessionState>,
}

impl SqliteTodoSession {
    /// Session for read-only requests; its transaction is deferred.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            writes: false,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Session for requests that write; it holds the write lock from its first statement.
    pub fn for_writes(pool: SqlitePool) -> Self {
        Self {
            writes: true,
            ..Self::new(pool)
        }
    }

    /// Lock the session state, beginning the transaction if none is open yet.
    async fn open(&self) -> DbErrorResult<MutexGuard<'_, SessionState>> {
        let mut state = self.state.lock().await;
        if state.transaction.is_none() {
            let tx = if self.writes {
                debug!("SqliteTodoSession - beginning immediate transaction");
                self.pool.begin_with(BEGIN_IMMEDIATE).await?
            } else {
                debug!("SqliteTodoSession - beginning transaction");
                self.pool.begin().await?
            };
            state.transaction = Some(tx);
        }
        Ok(state)
    }

    #[track_caller]
    fn transaction(state: &mut SessionState) -> DbErrorResult<&mut Transaction<'static, Sqlite>> {
        state
            .transaction
            .as_mut()
            .ok_or_else(|| DbError::Initialization {
                message: "session transaction is not open".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

#[async_trait]
impl TodoStore for SqliteTodoSession {
    type Error = DbError;

    async fn create(&self, item: &TodoItem) -> DbErrorResult<()> {
        let mut state = self.open().await?;
        let tx = Self::transaction(&mut state)?;

        let result = sqlx::query("INSERT INTO todos (id, title, completed) VALUES (?, ?, ?)")
            .bind(item.id.to_string())
            .bind(&item.title)
            .bind(item.completed)
            .execute(&mut **tx)
            .await?;

        state.affected_rows += result.rows_affected();
        Ok(())
    }

    async fn get(&self, id: Uuid) -> DbErrorResult<Option<TodoItem>> {
        let mut state = self.open().await?;
        let tx = Self::transaction(&mut state)?;

        let row = sqlx::query_as::<_, TodoRow>(
            "SELECT id, title, completed FROM todos WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&mut **tx)
        .await?;

        row.map(TodoItem::try_from).transpose()
    }

    async fn list(&self, limit: Option<u32>) -> DbErrorResult<Vec<TodoItem>> {
        let mut state = self.open().await?;
        let tx = Self::transaction(&mut state)?;

        let limit = limit.map_or(UNLIMITED, i64::from);

        let rows = sqlx::query_as::<_, TodoRow>(
            "SELECT id, title, completed FROM todos ORDER BY rowid LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&mut **tx)
        .await?;

        rows.into_iter()
            .map(TodoItem::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    async fn update(&self, item: &TodoItem) -> DbErrorResult<()> {
        let mut state = self.open().await?;
        let tx = Self::transaction(&mut state)?;

        let result = sqlx::query("UPDATE todos SET title = ?, completed = ? WHERE id = ?")
            .bind(&item.title)
            .bind(item.completed)
            .bind(item.id.to_string())
            .execute(&mut **tx)
            .await?;

        state.affected_rows += result.rows_affected();
        Ok(())
    }

    async fn delete(&self, item: &TodoItem) -> DbErrorResult<()> {
        let mut state = self.open().await?;
        let tx = Self::transaction(&mut state)?;

        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(item.id.to_string())
            .execute(&mut **tx)
            .await?;

        state.affected_rows += result.rows_affected();
        Ok(())
    }
}

#[async_trait]
impl UnitOfWork for SqliteTodoSession {
    type Error = DbError;

    /// Commit the open transaction. Without one there is nothing to finalise
    /// and the count is zero.
    async fn commit(&self) -> DbErrorResult<u64> {
        let mut state = self.state.lock().await;

        let Some(tx) = state.transaction.take() else {
            return Ok(0);
        };

        tx.commit().await?;

        let affected = std::mem::take(&mut state.affected_rows);
        debug!("SqliteTodoSession - committed {} row(s)", affected);
        Ok(affected)
    }
}

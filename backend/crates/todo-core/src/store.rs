//! Persistence contracts consumed by [`crate::TodoService`].
//!
//! Entity access and transaction finalisation are separate traits so either
//! can be substituted on its own. Both report failures through their own
//! error type, which the service hands back to its caller untouched.

use crate::TodoItem;

use std::error::Error as StdError;

use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait TodoStore: Send + Sync {
    type Error: StdError + Send + Sync + 'static;

    /// Stage an insert. Fails on constraint violations such as a duplicate id.
    async fn create(&self, item: &TodoItem) -> Result<(), Self::Error>;

    async fn get(&self, id: Uuid) -> Result<Option<TodoItem>, Self::Error>;

    /// At most `limit` items in store iteration order; `None` returns all.
    async fn list(&self, limit: Option<u32>) -> Result<Vec<TodoItem>, Self::Error>;

    /// Stage an overwrite of title and completed. Unknown ids are a no-op.
    async fn update(&self, item: &TodoItem) -> Result<(), Self::Error>;

    async fn delete(&self, item: &TodoItem) -> Result<(), Self::Error>;
}

#[async_trait]
pub trait UnitOfWork: Send + Sync {
    type Error: StdError + Send + Sync + 'static;

    /// Finalise everything staged so far, returning the affected row count.
    async fn commit(&self) -> Result<u64, Self::Error>;
}

//! In-memory collaborators for exercising `TodoService` without a database.

use crate::{TodoItem, TodoStore, UnitOfWork};

use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
#[error("fake store failure: {0}")]
pub struct FakeStoreError(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Create(Uuid),
    Get(Uuid),
    List(Option<u32>),
    Update(Uuid),
    Delete(Uuid),
}

/// Vec-backed store that records every call it receives.
#[derive(Default)]
pub struct FakeStore {
    items: Mutex<Vec<TodoItem>>,
    calls: Mutex<Vec<StoreCall>>,
    fail_writes: bool,
}

impl FakeStore {
    pub fn with_items(items: Vec<TodoItem>) -> Self {
        Self {
            items: Mutex::new(items),
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn items(&self) -> Vec<TodoItem> {
        self.items.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutation_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    StoreCall::Create(_) | StoreCall::Update(_) | StoreCall::Delete(_)
                )
            })
            .count()
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_writable(&self) -> Result<(), FakeStoreError> {
        if self.fail_writes {
            Err(FakeStoreError("disk full".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl TodoStore for FakeStore {
    type Error = FakeStoreError;

    async fn create(&self, item: &TodoItem) -> Result<(), Self::Error> {
        self.record(StoreCall::Create(item.id));
        self.check_writable()?;
        let mut items = self.items.lock().unwrap();
        if items.iter().any(|i| i.id == item.id) {
            return Err(FakeStoreError(format!("duplicate id {}", item.id)));
        }
        items.push(item.clone());
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<TodoItem>, Self::Error> {
        self.record(StoreCall::Get(id));
        Ok(self.items.lock().unwrap().iter().find(|i| i.id == id).cloned())
    }

    async fn list(&self, limit: Option<u32>) -> Result<Vec<TodoItem>, Self::Error> {
        self.record(StoreCall::List(limit));
        let items = self.items.lock().unwrap();
        let take = limit.map_or(items.len(), |l| l as usize);
        Ok(items.iter().take(take).cloned().collect())
    }

    async fn update(&self, item: &TodoItem) -> Result<(), Self::Error> {
        self.record(StoreCall::Update(item.id));
        self.check_writable()?;
        let mut items = self.items.lock().unwrap();
        if let Some(existing) = items.iter_mut().find(|i| i.id == item.id) {
            *existing = item.clone();
        }
        Ok(())
    }

    async fn delete(&self, item: &TodoItem) -> Result<(), Self::Error> {
        self.record(StoreCall::Delete(item.id));
        self.check_writable()?;
        self.items.lock().unwrap().retain(|i| i.id != item.id);
        Ok(())
    }
}

/// Unit of work that only counts commits.
#[derive(Default)]
pub struct CountingUnitOfWork {
    commits: Mutex<u64>,
    fail: bool,
}

impl CountingUnitOfWork {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn commits(&self) -> u64 {
        *self.commits.lock().unwrap()
    }
}

#[async_trait]
impl UnitOfWork for CountingUnitOfWork {
    type Error = FakeStoreError;

    async fn commit(&self) -> Result<u64, Self::Error> {
        *self.commits.lock().unwrap() += 1;
        if self.fail {
            return Err(FakeStoreError("commit rejected".into()));
        }
        Ok(1)
    }
}

pub fn item(title: &str, completed: bool) -> TodoItem {
    let mut item = TodoItem::new(title);
    item.completed = completed;
    item
}

//! ToDo service - validation, orchestration and status selection.
//!
//! The service is the only place that decides between a validation failure,
//! a missing item and success. Store or commit failures are not handled here:
//! they are returned as `Err` exactly as the store produced them.

use crate::validation::{validate_create, validate_update};
use crate::{
    CreateTodoRequest, ServiceResponse, TitleRules, TodoItem, TodoStore, TodoView, UnitOfWork,
    UpdateTodoRequest, ValidationErrors,
};

use std::sync::Arc;

use log::{debug, info};
use uuid::Uuid;

pub struct TodoService<S, U> {
    store: Arc<S>,
    unit_of_work: Arc<U>,
    rules: TitleRules,
}

impl<S, U> TodoService<S, U>
where
    S: TodoStore,
    U: UnitOfWork<Error = S::Error>,
{
    pub fn new(store: Arc<S>, unit_of_work: Arc<U>, rules: TitleRules) -> Self {
        Self {
            store,
            unit_of_work,
            rules,
        }
    }

    /// Create a new item. `None` stands for a request body that could not be read.
    pub async fn create(
        &self,
        request: Option<CreateTodoRequest>,
    ) -> Result<ServiceResponse<TodoView>, S::Error> {
        info!("TodoService::create - received request {:?}", request);

        let title = match validate_create(request.as_ref(), &self.rules) {
            Ok(title) => title,
            Err(errors) => {
                debug!("TodoService::create - rejected: {}", errors);
                return Ok(rejected(&errors));
            }
        };

        let item = TodoItem::new(title);

        self.store.create(&item).await?;
        self.unit_of_work.commit().await?;

        info!("TodoService::create - created {}", item.id);

        let message = format!("ToDo with ID {} was created.", item.id);
        Ok(ServiceResponse::created(TodoView::from(item), message))
    }

    pub async fn get(&self, id: Uuid) -> Result<ServiceResponse<TodoView>, S::Error> {
        info!("TodoService::get - ({}) received request", id);

        match self.store.get(id).await? {
            Some(item) => Ok(ServiceResponse::ok(TodoView::from(item))),
            None => Ok(not_found(id)),
        }
    }

    /// List items. An absent or non-positive page size returns everything.
    pub async fn list(
        &self,
        page_size: Option<i64>,
    ) -> Result<ServiceResponse<Vec<TodoView>>, S::Error> {
        info!("TodoService::list - ({:?}) received request", page_size);

        let limit = page_size
            .filter(|size| *size > 0)
            .map(|size| u32::try_from(size).unwrap_or(u32::MAX));

        let items = self.store.list(limit).await?;

        Ok(ServiceResponse::ok(
            items.into_iter().map(TodoView::from).collect(),
        ))
    }

    /// Replace title and completed of an existing item.
    pub async fn update(
        &self,
        id: Uuid,
        request: Option<UpdateTodoRequest>,
    ) -> Result<ServiceResponse<TodoView>, S::Error> {
        info!(
            "TodoService::update - ({}) received request {:?}",
            id, request
        );

        let title = match validate_update(request.as_ref(), &self.rules) {
            Ok(title) => title,
            Err(errors) => {
                debug!("TodoService::update - ({}) rejected: {}", id, errors);
                return Ok(rejected(&errors));
            }
        };
        let completed = request.as_ref().is_some_and(|r| r.completed);

        let Some(mut item) = self.store.get(id).await? else {
            return Ok(not_found(id));
        };

        item.apply_update(title, completed);

        self.store.update(&item).await?;
        self.unit_of_work.commit().await?;

        Ok(ServiceResponse::ok(TodoView::from(item)))
    }

    /// Remove an item. The returned payload is the item as it was before removal.
    pub async fn delete(&self, id: Uuid) -> Result<ServiceResponse<TodoView>, S::Error> {
        info!("TodoService::delete - ({}) received request", id);

        let Some(item) = self.store.get(id).await? else {
            return Ok(not_found(id));
        };

        self.store.delete(&item).await?;
        self.unit_of_work.commit().await?;

        Ok(ServiceResponse::no_content(TodoView::from(item)))
    }
}

fn not_found<T>(id: Uuid) -> ServiceResponse<T> {
    debug!("TodoService - ToDo {} not found", id);
    ServiceResponse::not_found(format!("ToDo with ID {} was not found.", id))
}

fn rejected<T>(errors: &ValidationErrors) -> ServiceResponse<T> {
    match errors.first_field() {
        Some(field) => ServiceResponse::bad_request_on(field, errors.message()),
        None => ServiceResponse::bad_request(errors.message()),
    }
}

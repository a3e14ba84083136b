//! Task operations scoped to the authenticated principal.
//!
//! Every operation on an existing task goes through [`fetch_owned_task`]:
//! a missing task is reported as 404 before ownership is compared, and a
//! task owned by someone else is reported as 401 `NOT_OWNER`.

use time::OffsetDateTime;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::{Owned, Payload};
use crate::entities::{NewTask, Task, TaskFilter, TaskUpdate};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::store::TaskStore;

pub const MAX_PAGE_SIZE: u32 = 20;
pub const DEFAULT_PAGE_SIZE: u32 = 5;

fn task_not_found(id: &str) -> AppError {
    AppError::not_found(ErrorCode::TaskNotFound, format!("Task {id} not found"))
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::invalid(
            ErrorCode::InvalidTaskName,
            "Task name cannot be empty",
        ));
    }
    Ok(())
}

/// Existence check followed by the ownership check.
pub async fn fetch_owned_task(
    tasks: &dyn TaskStore,
    id: &str,
    principal: &Payload,
) -> Result<Task, AppError> {
    let task = tasks.get_task(id).await?.ok_or_else(|| task_not_found(id))?;

    if let Err(err) = task.ensure_owned_by(principal) {
        warn!(task_id = %id, user_id = principal.user_id, "task ownership mismatch");
        return Err(err.into());
    }

    Ok(task)
}

pub async fn create_task(
    tasks: &dyn TaskStore,
    principal: &Payload,
    name: String,
    deadline: OffsetDateTime,
) -> Result<Task, AppError> {
    validate_name(&name)?;

    let task = tasks
        .create_task(NewTask {
            id: Uuid::new_v4().simple().to_string(),
            creator_id: principal.user_id,
            name,
            deadline,
        })
        .await?;

    info!(task_id = %task.id, user_id = principal.user_id, "task created");
    Ok(task)
}

/// Paging as requested by the client: 1-based page, bounded page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub limit: u32,
}

impl Page {
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Result<Self, AppError> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE);

        if page == 0 {
            return Err(AppError::invalid(
                ErrorCode::InvalidPagination,
                "page must be at least 1",
            ));
        }
        if limit == 0 || limit > MAX_PAGE_SIZE {
            return Err(AppError::invalid(
                ErrorCode::InvalidPagination,
                format!("limit must be between 1 and {MAX_PAGE_SIZE}"),
            ));
        }

        Ok(Self { page, limit })
    }

    pub fn offset(&self) -> u32 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// The principal's tasks; `filter.creator_id` is overwritten with the principal id.
pub async fn list_tasks(
    tasks: &dyn TaskStore,
    principal: &Payload,
    mut filter: TaskFilter,
    page: Page,
) -> Result<Vec<Task>, AppError> {
    filter.creator_id = principal.user_id;
    filter.limit = page.limit;
    filter.offset = page.offset();

    Ok(tasks.list_tasks(&filter).await?)
}

pub async fn update_task(
    tasks: &dyn TaskStore,
    id: &str,
    principal: &Payload,
    update: TaskUpdate,
) -> Result<Task, AppError> {
    if let Some(name) = &update.name {
        validate_name(name)?;
    }

    fetch_owned_task(tasks, id, principal).await?;

    tasks
        .update_task(id, update)
        .await?
        .ok_or_else(|| task_not_found(id))
}

pub async fn delete_task(
    tasks: &dyn TaskStore,
    id: &str,
    principal: &Payload,
) -> Result<(), AppError> {
    fetch_owned_task(tasks, id, principal).await?;

    if !tasks.delete_task(id).await? {
        return Err(task_not_found(id));
    }

    info!(task_id = %id, user_id = principal.user_id, "task deleted");
    Ok(())
}

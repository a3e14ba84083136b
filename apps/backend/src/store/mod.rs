//! Persistence seam.
//!
//! Handlers only see these traits; `memory::MemoryStore` is the bundled
//! implementation. A missing row is `Ok(None)`, never an error.

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::{NewTask, NewUser, Task, TaskFilter, TaskUpdate, User};

pub mod memory;

pub use memory::MemoryStore;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("username {0} already exists")]
    UsernameTaken(String),
    #[error("task id {0} already exists")]
    TaskIdTaken(String),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError>;

    async fn get_user(&self, username: &str) -> Result<Option<User>, StoreError>;
}

#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn create_task(&self, new_task: NewTask) -> Result<Task, StoreError>;

    async fn get_task(&self, id: &str) -> Result<Option<Task>, StoreError>;

    /// Tasks matching `filter`, ordered by deadline then id, paged by `limit`/`offset`.
    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, StoreError>;

    async fn update_task(&self, id: &str, update: TaskUpdate) -> Result<Option<Task>, StoreError>;

    /// Returns whether a row was removed.
    async fn delete_task(&self, id: &str) -> Result<bool, StoreError>;
}

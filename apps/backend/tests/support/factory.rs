//! Seed data for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tasks_backend::entities::{NewTask, NewUser, Task, TaskFilter, TaskUpdate, User};
use tasks_backend::store::{StoreError, TaskStore, UserStore};
use tasks_backend::MemoryStore;
use time::macros::datetime;
use time::OffsetDateTime;

pub const DEADLINE: OffsetDateTime = datetime!(2030-01-01 12:00 UTC);

/// Insert a task owned by `creator_id` directly through the store.
pub async fn seed_task(store: &dyn TaskStore, id: &str, creator_id: i64, name: &str) -> Task {
    seed_task_due(store, id, creator_id, name, DEADLINE).await
}

pub async fn seed_task_due(
    store: &dyn TaskStore,
    id: &str,
    creator_id: i64,
    name: &str,
    deadline: OffsetDateTime,
) -> Task {
    store
        .create_task(NewTask {
            id: id.to_string(),
            creator_id,
            name: name.to_string(),
            deadline,
        })
        .await
        .expect("seed task")
}

/// MemoryStore wrapper that counts every store call.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    calls: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserStore for CountingStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        self.hit();
        self.inner.create_user(new_user).await
    }

    async fn get_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.hit();
        self.inner.get_user(username).await
    }
}

#[async_trait]
impl TaskStore for CountingStore {
    async fn create_task(&self, new_task: NewTask) -> Result<Task, StoreError> {
        self.hit();
        self.inner.create_task(new_task).await
    }

    async fn get_task(&self, id: &str) -> Result<Option<Task>, StoreError> {
        self.hit();
        self.inner.get_task(id).await
    }

    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, StoreError> {
        self.hit();
        self.inner.list_tasks(filter).await
    }

    async fn update_task(&self, id: &str, update: TaskUpdate) -> Result<Option<Task>, StoreError> {
        self.hit();
        self.inner.update_task(id, update).await
    }

    async fn delete_task(&self, id: &str) -> Result<bool, StoreError> {
        self.hit();
        self.inner.delete_task(id).await
    }
}

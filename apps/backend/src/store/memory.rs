use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use time::OffsetDateTime;
use tracing::debug;

use super::{StoreError, TaskStore, UserStore};
use crate::entities::{NewTask, NewUser, Task, TaskFilter, TaskUpdate, User};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<i64, User>,
    user_ids_by_name: HashMap<String, i64>,
    last_user_id: i64,
    tasks: HashMap<String, Task>,
}

/// In-process store backed by hash maps behind a single lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write();
        if tables.user_ids_by_name.contains_key(&new_user.username) {
            return Err(StoreError::UsernameTaken(new_user.username));
        }

        tables.last_user_id += 1;
        let user = User {
            id: tables.last_user_id,
            username: new_user.username,
            hashed_password: new_user.hashed_password,
            created_at: OffsetDateTime::now_utc(),
        };
        tables
            .user_ids_by_name
            .insert(user.username.clone(), user.id);
        tables.users.insert(user.id, user.clone());

        debug!(user_id = user.id, "user created");
        Ok(user)
    }

    async fn get_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read();
        Ok(tables
            .user_ids_by_name
            .get(username)
            .and_then(|id| tables.users.get(id))
            .cloned())
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn create_task(&self, new_task: NewTask) -> Result<Task, StoreError> {
        let mut tables = self.tables.write();
        if tables.tasks.contains_key(&new_task.id) {
            return Err(StoreError::TaskIdTaken(new_task.id));
        }

        let task = Task {
            id: new_task.id,
            creator_id: new_task.creator_id,
            name: new_task.name,
            deadline: new_task.deadline,
            completed: false,
            created_at: OffsetDateTime::now_utc(),
        };
        tables.tasks.insert(task.id.clone(), task.clone());
        Ok(task)
    }

    async fn get_task(&self, id: &str) -> Result<Option<Task>, StoreError> {
        Ok(self.tables.read().tasks.get(id).cloned())
    }

    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, StoreError> {
        let tables = self.tables.read();
        let mut tasks: Vec<Task> = tables
            .tasks
            .values()
            .filter(|task| filter.matches(task))
            .cloned()
            .collect();
        tasks.sort_by(|a, b| a.deadline.cmp(&b.deadline).then_with(|| a.id.cmp(&b.id)));

        Ok(tasks
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .collect())
    }

    async fn update_task(&self, id: &str, update: TaskUpdate) -> Result<Option<Task>, StoreError> {
        let mut tables = self.tables.write();
        let Some(task) = tables.tasks.get_mut(id) else {
            return Ok(None);
        };

        if let Some(name) = update.name {
            task.name = name;
        }
        if let Some(deadline) = update.deadline {
            task.deadline = deadline;
        }
        if let Some(completed) = update.completed {
            task.completed = completed;
        }
        Ok(Some(task.clone()))
    }

    async fn delete_task(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.tables.write().tasks.remove(id).is_some())
    }
}

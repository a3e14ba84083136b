use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::auth::Owned;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub creator_id: i64,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub deadline: OffsetDateTime,
    pub completed: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Owned for Task {
    fn owner_id(&self) -> i64 {
        self.creator_id
    }
}

#[derive(Debug, Clone)]
pub struct NewTask {
    pub id: String,
    pub creator_id: i64,
    pub name: String,
    pub deadline: OffsetDateTime,
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub name: Option<String>,
    pub deadline: Option<OffsetDateTime>,
    pub completed: Option<bool>,
}

/// Listing query scoped to a single creator.
#[derive(Debug, Clone)]
pub struct TaskFilter {
    pub creator_id: i64,
    /// Case-sensitive substring match on the name
    pub name: Option<String>,
    pub start_deadline: Option<OffsetDateTime>,
    pub end_deadline: Option<OffsetDateTime>,
    pub completed: Option<bool>,
    pub limit: u32,
    pub offset: u32,
}

impl TaskFilter {
    pub fn for_creator(creator_id: i64) -> Self {
        Self {
            creator_id,
            name: None,
            start_deadline: None,
            end_deadline: None,
            completed: None,
            limit: 5,
            offset: 0,
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        task.creator_id == self.creator_id
            && self
                .name
                .as_deref()
                .map_or(true, |name| task.name.contains(name))
            && self.start_deadline.map_or(true, |start| task.deadline >= start)
            && self.end_deadline.map_or(true, |end| task.deadline <= end)
            && self.completed.map_or(true, |done| task.completed == done)
    }
}

pub mod tasks;
pub mod users;

pub use tasks::{NewTask, Task, TaskFilter, TaskUpdate};
pub use users::{NewUser, User};

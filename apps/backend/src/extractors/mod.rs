pub mod principal;
pub mod task_id;
pub mod validated_json;

pub use principal::Principal;
pub use task_id::TaskId;
pub use validated_json::{ValidatedJson, ValidatedQuery};

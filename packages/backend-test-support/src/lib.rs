//! Backend test support utilities
//!
//! Shared by the backend's unit and integration tests: Problem Details
//! assertions and idempotent test logging.

pub mod logging;
pub mod problem_details;

pub use problem_details::{assert_problem_details, ProblemDetailsLike};

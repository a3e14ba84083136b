//! Error codes for the tasks backend.

pub mod error_code;

pub use error_code::ErrorCode;

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod telemetry;


// Re-exports for public API
pub use auth::{
    ensure_owner, AuthError, AuthorizationGate, JwtMaker, Owned, Payload, TokenError, TokenMaker,
};
pub use config::AppConfig;
pub use error::AppError;
pub use errors::ErrorCode;
pub use extractors::Principal;
pub use middleware::{cors_middleware, RequestTrace, StructuredLogger};
pub use state::{build_state, AppState};
pub use store::{MemoryStore, TaskStore, UserStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}

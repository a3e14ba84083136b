#![cfg(test)]

//! Test logging for unit tests; delegates to the shared test-support crate so
//! unit and integration tests read the same `TEST_LOG`/`RUST_LOG` settings.

pub fn init() {
    backend_test_support::logging::init();
}

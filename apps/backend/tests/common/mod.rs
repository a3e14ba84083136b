#![allow(dead_code)]

// tests/common/mod.rs
use serde_json::Value;

pub use backend_test_support::problem_details::{assert_problem_details, ProblemDetailsLike};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

pub const X_TRACE_ID: &str = "x-trace-id";
pub const X_REQUEST_ID: &str = "x-request-id";

/// Helper to check that the trace_id in a JSON body matches the x-trace-id header
pub fn assert_trace_id_matches(json: &Value, header_trace_id: &str) {
    let trace_id_in_body = json["trace_id"]
        .as_str()
        .expect("trace_id field should be a string");
    assert_eq!(
        trace_id_in_body, header_trace_id,
        "trace_id in body should match x-trace-id header"
    );
}

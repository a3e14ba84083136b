//! Token helpers for tests

use std::sync::Arc;

use tasks_backend::{JwtMaker, TokenMaker};
use time::Duration;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn test_maker() -> Arc<JwtMaker> {
    Arc::new(JwtMaker::new(TEST_SECRET).expect("test secret is long enough"))
}

/// Mint a token valid for `duration`, signed with [`TEST_SECRET`].
pub fn mint_token(user_id: i64, username: &str, duration: Duration) -> String {
    let (token, _) = test_maker()
        .create_token(user_id, username, duration)
        .expect("should mint token successfully");
    token
}

/// Mint a token that expired a minute ago.
pub fn mint_expired_token(user_id: i64, username: &str) -> String {
    mint_token(user_id, username, Duration::minutes(-1))
}

/// Full Authorization header value including the "Bearer " prefix
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

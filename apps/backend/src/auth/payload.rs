//! Claims carried inside an access token.

use rand::rngs::OsRng;
use rand::TryRngCore;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use super::errors::TokenError;

/// Authenticated claims embedded in a token.
///
/// `user_id` is authoritative for authorization decisions; `username` is
/// carried for display only. Timestamps travel as the registered `iat` and
/// `exp` claims (seconds since epoch), the id as `jti`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(rename = "jti")]
    pub id: Uuid,
    pub user_id: i64,
    pub username: String,
    #[serde(rename = "iat", with = "time::serde::timestamp")]
    pub issued_at: OffsetDateTime,
    #[serde(rename = "exp", with = "time::serde::timestamp")]
    pub expire_at: OffsetDateTime,
}

impl Payload {
    /// Build a payload issued now and expiring after `duration`.
    ///
    /// A zero or negative `duration` is accepted and yields a payload that is
    /// already expired. A zero `user_id`, an empty `username` or an expiry
    /// outside the representable date range is rejected with `InvalidPayload`.
    pub fn new(user_id: i64, username: &str, duration: Duration) -> Result<Self, TokenError> {
        if user_id == 0 {
            return Err(TokenError::InvalidPayload("user_id must be non-zero"));
        }
        if username.is_empty() {
            return Err(TokenError::InvalidPayload("username must be non-empty"));
        }

        let issued_at = OffsetDateTime::now_utc();
        let expire_at = issued_at
            .checked_add(duration)
            .ok_or(TokenError::InvalidPayload("expiry is out of range"))?;

        Ok(Self {
            id: random_token_id()?,
            user_id,
            username: username.to_string(),
            issued_at,
            expire_at,
        })
    }

    /// Expired iff the current wall-clock time is past `expire_at`.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(OffsetDateTime::now_utc())
    }

    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        now > self.expire_at
    }
}

fn random_token_id() -> Result<Uuid, TokenError> {
    let mut bytes = [0u8; 16];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| TokenError::IdentifierGeneration(e.to_string()))?;
    Ok(uuid::Builder::from_random_bytes(bytes).into_uuid())
}

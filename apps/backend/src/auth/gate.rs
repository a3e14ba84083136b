//! Authorization header parsing and token verification.
//!
//! The actix middleware wrapper lives in `crate::middleware::authorization`;
//! this module holds the decision logic so it can be exercised without HTTP.

use std::fmt;
use std::sync::Arc;

use super::errors::AuthError;
use super::payload::Payload;
use super::token_maker::TokenMaker;

/// Scheme keyword expected as the first field of the `Authorization` header.
pub const BEARER_SCHEME: &str = "Bearer";

/// Gate placed in front of every protected route.
#[derive(Clone)]
pub struct AuthorizationGate {
    maker: Arc<dyn TokenMaker>,
    scheme: String,
}

impl AuthorizationGate {
    pub fn new(maker: Arc<dyn TokenMaker>) -> Self {
        Self::with_scheme(maker, BEARER_SCHEME)
    }

    pub fn with_scheme(maker: Arc<dyn TokenMaker>, scheme: impl Into<String>) -> Self {
        Self {
            maker,
            scheme: scheme.into(),
        }
    }

    /// Verify the raw `Authorization` header value and return its payload.
    ///
    /// Rejections, in evaluation order:
    /// 1. absent or empty header → `MissingAuthorizationHeader`
    /// 2. not exactly two whitespace-separated fields → `InvalidAuthorizationHeaderFormat`
    /// 3. first field differs (case-sensitive) from the scheme → `UnsupportedAuthorizationType`
    /// 4. token rejected by the maker → `Token(..)`
    pub fn authorize(&self, header: Option<&str>) -> Result<Payload, AuthError> {
        let token = self.extract_token(header)?;
        Ok(self.maker.verify_token(token)?)
    }

    /// Steps 1-3 of [`authorize`](Self::authorize): split the header and return the token field.
    pub fn extract_token<'h>(&self, header: Option<&'h str>) -> Result<&'h str, AuthError> {
        let header = match header {
            Some(value) if !value.is_empty() => value,
            _ => return Err(AuthError::MissingAuthorizationHeader),
        };

        let fields: Vec<&str> = header.split_whitespace().collect();
        let [scheme, token] = fields.as_slice() else {
            return Err(AuthError::InvalidAuthorizationHeaderFormat);
        };

        if *scheme != self.scheme.as_str() {
            return Err(AuthError::UnsupportedAuthorizationType(scheme.to_string()));
        }

        Ok(*token)
    }
}

impl fmt::Debug for AuthorizationGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizationGate")
            .field("scheme", &self.scheme)
            .finish_non_exhaustive()
    }
}

use thiserror::Error;

/// Failures produced while minting or verifying tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The signing secret is too short to be used.
    #[error("invalid key size: must be at least {min} characters, got {actual}")]
    WeakSecret { min: usize, actual: usize },
    /// The random token identifier could not be generated.
    #[error("failed to generate token id: {0}")]
    IdentifierGeneration(String),
    /// The payload could not be built from the given identity and duration.
    #[error("invalid token payload: {0}")]
    InvalidPayload(&'static str),
    /// Serializing or signing the payload failed.
    #[error("failed to sign token: {0}")]
    Signing(String),
    /// Malformed token, unexpected algorithm or signature mismatch.
    #[error("token is invalid")]
    InvalidToken,
    /// Well-formed and correctly signed, but past its expiry.
    #[error("token has expired")]
    ExpiredToken,
}

/// Rejections raised by the authorization gate and the ownership check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("authorization header is not provided")]
    MissingAuthorizationHeader,
    #[error("invalid authorization header format")]
    InvalidAuthorizationHeaderFormat,
    #[error("unsupported authorization type {0}")]
    UnsupportedAuthorizationType(String),
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error("resource doesn't belong to the authenticated user")]
    NotOwner,
}

impl AuthError {
    /// True when the rejection came from an expired (but otherwise valid) token.
    pub fn is_expired(&self) -> bool {
        matches!(self, AuthError::Token(TokenError::ExpiredToken))
    }
}

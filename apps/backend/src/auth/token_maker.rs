use std::fmt;

use jsonwebtoken::{decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use time::Duration;

use super::errors::TokenError;
use super::payload::Payload;

/// Minimum accepted length of the symmetric signing secret, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Mints and verifies bearer tokens.
///
/// Implementations hold only immutable key material and are shared across
/// request handlers behind an `Arc`.
pub trait TokenMaker: Send + Sync {
    /// Create a signed token for the given principal, valid for `duration`.
    fn create_token(
        &self,
        user_id: i64,
        username: &str,
        duration: Duration,
    ) -> Result<(String, Payload), TokenError>;

    /// Verify a token string and return its payload.
    ///
    /// Errors:
    /// - malformed token, wrong algorithm or bad signature → `TokenError::InvalidToken`
    /// - correctly signed but past `expire_at` → `TokenError::ExpiredToken`
    fn verify_token(&self, token: &str) -> Result<Payload, TokenError>;
}

/// The single signing scheme accepted by this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningAlgorithm {
    Hs256,
}

impl SigningAlgorithm {
    pub const fn as_jwt(self) -> Algorithm {
        match self {
            SigningAlgorithm::Hs256 => Algorithm::HS256,
        }
    }

    /// Checks a token header's `alg` against this scheme.
    pub fn accepts(self, alg: Algorithm) -> bool {
        matches!((self, alg), (SigningAlgorithm::Hs256, Algorithm::HS256))
    }
}

/// HS256 JWT implementation of [`TokenMaker`].
#[derive(Clone)]
pub struct JwtMaker {
    algorithm: SigningAlgorithm,
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtMaker {
    /// Build a maker from the signing secret.
    ///
    /// Fails with `TokenError::WeakSecret` when the secret is shorter than
    /// [`MIN_SECRET_LEN`], so a misconfigured deployment stops at startup.
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, TokenError> {
        let secret = secret.as_ref();
        if secret.len() < MIN_SECRET_LEN {
            return Err(TokenError::WeakSecret {
                min: MIN_SECRET_LEN,
                actual: secret.len(),
            });
        }

        Ok(Self {
            algorithm: SigningAlgorithm::Hs256,
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        })
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(self.algorithm.as_jwt());
        // Expiry is checked against the decoded payload with no leeway.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);
        validation
    }
}

impl fmt::Debug for JwtMaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtMaker")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

impl TokenMaker for JwtMaker {
    fn create_token(
        &self,
        user_id: i64,
        username: &str,
        duration: Duration,
    ) -> Result<(String, Payload), TokenError> {
        let payload = Payload::new(user_id, username, duration)?;

        let token = encode(
            &Header::new(self.algorithm.as_jwt()),
            &payload,
            &self.encoding,
        )
        .map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok((token, payload))
    }

    fn verify_token(&self, token: &str) -> Result<Payload, TokenError> {
        // Pin the algorithm before touching the signature.
        let header = decode_header(token).map_err(|_| TokenError::InvalidToken)?;
        if !self.algorithm.accepts(header.alg) {
            return Err(TokenError::InvalidToken);
        }

        let payload = decode::<Payload>(token, &self.decoding, &self.validation())
            .map(|data| data.claims)
            .map_err(|_| TokenError::InvalidToken)?;

        if payload.is_expired() {
            return Err(TokenError::ExpiredToken);
        }

        Ok(payload)
    }
}

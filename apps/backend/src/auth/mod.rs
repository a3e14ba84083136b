//! Token lifecycle and request authorization.
//!
//! `TokenMaker` mints and verifies signed bearer tokens, `AuthorizationGate`
//! turns an `Authorization` header into a verified [`Payload`], and
//! [`ensure_owner`] guards access to fetched resources.

pub mod errors;
pub mod gate;
pub mod ownership;
pub mod password;
pub mod payload;
pub mod token_maker;

pub use errors::{AuthError, TokenError};
pub use gate::{AuthorizationGate, BEARER_SCHEME};
pub use ownership::{ensure_owner, Owned};
pub use payload::Payload;
pub use token_maker::{JwtMaker, SigningAlgorithm, TokenMaker, MIN_SECRET_LEN};

//! Ownership comparison applied after a resource has been fetched.
//!
//! Callers must report a missing resource before invoking this check so
//! "no such resource" stays distinguishable from "not yours".

use super::errors::AuthError;
use super::payload::Payload;

/// Resources that record the id of the principal that owns them.
pub trait Owned {
    fn owner_id(&self) -> i64;

    /// Ownership check against the principal attached to the request.
    fn ensure_owned_by(&self, principal: &Payload) -> Result<(), AuthError> {
        ensure_owner(self.owner_id(), principal.user_id)
    }
}

/// Exact comparison of owner id and principal id.
pub fn ensure_owner(resource_owner_id: i64, principal_user_id: i64) -> Result<(), AuthError> {
    if resource_owner_id == principal_user_id {
        Ok(())
    } else {
        Err(AuthError::NotOwner)
    }
}

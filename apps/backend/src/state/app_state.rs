use std::sync::Arc;

use time::Duration;

use crate::auth::{AuthorizationGate, TokenMaker};
use crate::store::{TaskStore, UserStore};

/// Application state containing shared resources.
///
/// Cloned into every actix worker; all members are immutable or internally
/// synchronized.
#[derive(Clone)]
pub struct AppState {
    /// Token maker shared with the authorization gate
    pub tokens: Arc<dyn TokenMaker>,
    pub users: Arc<dyn UserStore>,
    pub tasks: Arc<dyn TaskStore>,
    /// Lifetime of tokens minted at login
    pub access_token_duration: Duration,
}

impl AppState {
    pub fn new(
        tokens: Arc<dyn TokenMaker>,
        users: Arc<dyn UserStore>,
        tasks: Arc<dyn TaskStore>,
        access_token_duration: Duration,
    ) -> Self {
        Self {
            tokens,
            users,
            tasks,
            access_token_duration,
        }
    }

    /// Gate verifying tokens with this state's token maker.
    pub fn authorization_gate(&self) -> AuthorizationGate {
        AuthorizationGate::new(self.tokens.clone())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("access_token_duration", &self.access_token_duration)
            .finish_non_exhaustive()
    }
}

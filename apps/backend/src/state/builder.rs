use std::sync::Arc;

use time::Duration;

use crate::auth::{JwtMaker, TokenMaker};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::store::{MemoryStore, TaskStore, UserStore};

const DEFAULT_ACCESS_TOKEN_DURATION: Duration = Duration::minutes(15);

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    token_secret: Option<Vec<u8>>,
    token_maker: Option<Arc<dyn TokenMaker>>,
    users: Option<Arc<dyn UserStore>>,
    tasks: Option<Arc<dyn TaskStore>>,
    access_token_duration: Duration,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            token_secret: None,
            token_maker: None,
            users: None,
            tasks: None,
            access_token_duration: DEFAULT_ACCESS_TOKEN_DURATION,
        }
    }

    /// Take secret and token duration from a loaded configuration.
    pub fn with_config(mut self, config: &AppConfig) -> Self {
        self.token_secret = Some(config.token_secret.clone());
        self.access_token_duration = config.access_token_duration;
        self
    }

    pub fn with_token_secret(mut self, secret: impl Into<Vec<u8>>) -> Self {
        self.token_secret = Some(secret.into());
        self
    }

    /// Use a ready-made token maker instead of building one from the secret.
    pub fn with_token_maker(mut self, maker: Arc<dyn TokenMaker>) -> Self {
        self.token_maker = Some(maker);
        self
    }

    /// Use one store for both users and tasks.
    pub fn with_store<S>(mut self, store: Arc<S>) -> Self
    where
        S: UserStore + TaskStore + 'static,
    {
        self.users = Some(store.clone());
        self.tasks = Some(store);
        self
    }

    pub fn with_access_token_duration(mut self, duration: Duration) -> Self {
        self.access_token_duration = duration;
        self
    }

    /// Fails with `AppError::Config` when no usable signing secret is available.
    pub fn build(self) -> Result<AppState, AppError> {
        let tokens: Arc<dyn TokenMaker> = match (self.token_maker, self.token_secret) {
            (Some(maker), _) => maker,
            (None, Some(secret)) => Arc::new(JwtMaker::new(secret)?),
            (None, None) => return Err(AppError::config("token signing secret is not set")),
        };

        let (users, tasks) = match (self.users, self.tasks) {
            (Some(users), Some(tasks)) => (users, tasks),
            _ => {
                let store = Arc::new(MemoryStore::new());
                let users: Arc<dyn UserStore> = store.clone();
                let tasks: Arc<dyn TaskStore> = store;
                (users, tasks)
            }
        };

        Ok(AppState::new(tokens, users, tasks, self.access_token_duration))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

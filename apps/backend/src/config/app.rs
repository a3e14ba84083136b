//! Process configuration loaded once at startup.

use std::fmt;

use time::Duration;

use super::duration::parse_duration;
use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_ACCESS_TOKEN_DURATION: &str = "15m";
const MAX_ACCESS_TOKEN_DURATION: Duration = Duration::days(30);
const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Explicit configuration passed to the server builder.
#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Symmetric token signing secret
    pub token_secret: Vec<u8>,
    pub access_token_duration: Duration,
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Required: `TOKEN_SECRET_KEY`. Optional: `BACKEND_HOST`, `BACKEND_PORT`,
    /// `ACCESS_TOKEN_DURATION`, `CORS_ALLOWED_ORIGINS`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = non_empty("BACKEND_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match non_empty("BACKEND_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::config("BACKEND_PORT must be a valid port number"))?,
            None => DEFAULT_PORT,
        };

        let token_secret = non_empty("TOKEN_SECRET_KEY")
            .ok_or_else(|| AppError::config("TOKEN_SECRET_KEY is not specified"))?
            .into_bytes();

        let raw_duration = non_empty("ACCESS_TOKEN_DURATION")
            .unwrap_or_else(|| DEFAULT_ACCESS_TOKEN_DURATION.to_string());
        let access_token_duration = parse_duration(&raw_duration)
            .map_err(|e| AppError::config(format!("ACCESS_TOKEN_DURATION: {e}")))?;
        if access_token_duration <= Duration::ZERO {
            return Err(AppError::config("ACCESS_TOKEN_DURATION must be positive"));
        }
        if access_token_duration > MAX_ACCESS_TOKEN_DURATION {
            return Err(AppError::config("ACCESS_TOKEN_DURATION must not exceed 30 days"));
        }

        let cors_allowed_origins = parse_origins(non_empty("CORS_ALLOWED_ORIGINS").as_deref());

        Ok(Self {
            host,
            port,
            token_secret,
            access_token_duration,
            cors_allowed_origins,
        })
    }
}

fn parse_origins(raw: Option<&str>) -> Vec<String> {
    let origins: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        origins
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("token_secret", &"<redacted>")
            .field("access_token_duration", &self.access_token_duration)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .finish()
    }
}

use time::OffsetDateTime;
use tracing::{info, warn};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::TokenMaker;
use crate::entities::{NewUser, User};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::store::UserStore;

pub const MIN_PASSWORD_LEN: usize = 6;

fn invalid_credentials() -> AppError {
    AppError::unauthorized(ErrorCode::InvalidCredentials, "invalid credentials")
}

fn validate_credentials(username: &str, password: &str) -> Result<(), AppError> {
    if username.is_empty() || !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::invalid(
            ErrorCode::InvalidUsername,
            "Username must be non-empty and contain only alphanumeric characters",
        ));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::invalid(
            ErrorCode::InvalidPassword,
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    Ok(())
}

/// Register a new user with a hashed password.
pub async fn sign_up(
    users: &dyn UserStore,
    username: &str,
    password: &str,
) -> Result<User, AppError> {
    validate_credentials(username, password)?;

    let user = users
        .create_user(NewUser {
            username: username.to_string(),
            hashed_password: hash_password(password)?,
        })
        .await?;

    info!(user_id = user.id, "user signed up");
    Ok(user)
}

/// Successful login: the minted token and the user it was minted for.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub access_token: String,
    pub access_token_expire_at: OffsetDateTime,
    pub user: User,
}

/// Check credentials and mint an access token.
///
/// Unknown usernames and wrong passwords both yield `INVALID_CREDENTIALS`.
pub async fn login(
    users: &dyn UserStore,
    tokens: &dyn TokenMaker,
    username: &str,
    password: &str,
    duration: time::Duration,
) -> Result<LoginOutcome, AppError> {
    validate_credentials(username, password)?;

    let Some(user) = users.get_user(username).await? else {
        warn!("login for unknown username");
        return Err(invalid_credentials());
    };

    if !verify_password(password, &user.hashed_password)? {
        warn!(user_id = user.id, "login with wrong password");
        return Err(invalid_credentials());
    }

    let (access_token, payload) = tokens.create_token(user.id, &user.username, duration)?;

    info!(user_id = user.id, token_id = %payload.id, "access token issued");
    Ok(LoginOutcome {
        access_token,
        access_token_expire_at: payload.expire_at,
        user,
    })
}

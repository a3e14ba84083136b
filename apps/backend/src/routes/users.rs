use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::entities::User;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::users::{login, sign_up};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(with = "time::serde::rfc3339")]
    pub access_token_expire_at: OffsetDateTime,
    pub user: UserResponse,
}

async fn create_user(
    body: ValidatedJson<CredentialsRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user = sign_up(app_state.users.as_ref(), &body.username, &body.password).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

async fn login_user(
    body: ValidatedJson<CredentialsRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let outcome = login(
        app_state.users.as_ref(),
        app_state.tokens.as_ref(),
        &body.username,
        &body.password,
        app_state.access_token_duration,
    )
    .await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        access_token: outcome.access_token,
        access_token_expire_at: outcome.access_token_expire_at,
        user: outcome.user.into(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_user));
    cfg.route("/login", web::post().to(login_user));
}

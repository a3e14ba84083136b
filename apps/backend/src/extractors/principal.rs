use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::dev::Payload as RequestBody;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::auth::Payload;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Verified principal of the current request.
///
/// Populated from the `Payload` the authorization gate stored in request
/// extensions. Handlers outside a gated scope get a 401 instead of a
/// principal.
#[derive(Debug, Clone)]
pub struct Principal(pub Payload);

impl Principal {
    pub fn user_id(&self) -> i64 {
        self.0.user_id
    }

    pub fn into_inner(self) -> Payload {
        self.0
    }
}

impl Deref for Principal {
    type Target = Payload;

    fn deref(&self) -> &Payload {
        &self.0
    }
}

impl FromRequest for Principal {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut RequestBody) -> Self::Future {
        let principal = req
            .extensions()
            .get::<Payload>()
            .cloned()
            .map(Principal)
            .ok_or_else(|| AppError::unauthorized(ErrorCode::Unauthorized, "Authentication required"));

        ready(principal)
    }
}

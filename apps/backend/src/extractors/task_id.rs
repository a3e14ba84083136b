use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// `{task_id}` path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskId(pub String);

impl FromRequest for TaskId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let id = req
            .match_info()
            .get("task_id")
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| TaskId(id.to_string()))
            .ok_or_else(|| AppError::invalid(ErrorCode::BadRequest, "Missing task id"));

        ready(id)
    }
}

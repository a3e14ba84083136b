use std::future::Future;
use std::ops::Deref;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{web, FromRequest, HttpRequest};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// JSON body extractor whose failures render as Problem Details (400).
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = web::Json::<T>::from_request(req, payload);

        Box::pin(async move {
            match fut.await {
                Ok(json) => Ok(ValidatedJson(json.into_inner())),
                Err(err) => {
                    debug!(error = %err, "JSON body rejected");
                    let detail = err
                        .as_error::<JsonPayloadError>()
                        .map(classify_json_error)
                        .unwrap_or_else(|| "Invalid JSON".to_string());
                    Err(AppError::invalid(ErrorCode::ValidationError, detail))
                }
            }
        })
    }
}

/// Query-string extractor whose failures render as Problem Details (400).
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<T> ValidatedQuery<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for ValidatedQuery<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let parsed = web::Query::<T>::from_query(req.query_string())
            .map(|query| ValidatedQuery(query.into_inner()))
            .map_err(|err| {
                let QueryPayloadError::Deserialize(inner) = &err else {
                    return AppError::invalid(ErrorCode::ValidationError, "Invalid query string");
                };
                AppError::invalid(
                    ErrorCode::ValidationError,
                    format!("Invalid query string: {inner}"),
                )
            });

        std::future::ready(parsed)
    }
}

/// Sanitized message for a rejected JSON body
fn classify_json_error(error: &JsonPayloadError) -> String {
    match error {
        JsonPayloadError::ContentType => "Content type must be application/json".to_string(),
        JsonPayloadError::Deserialize(inner) => match inner.classify() {
            serde_json::error::Category::Syntax => {
                format!("Invalid JSON at line {}", inner.line())
            }
            serde_json::error::Category::Eof => {
                "Invalid JSON: unexpected end of input".to_string()
            }
            serde_json::error::Category::Data => format!("Invalid JSON: {inner}"),
            serde_json::error::Category::Io => {
                "Invalid JSON: I/O error while reading body".to_string()
            }
        },
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "Request body is too large".to_string()
        }
        _ => "Failed to read request body".to_string(),
    }
}

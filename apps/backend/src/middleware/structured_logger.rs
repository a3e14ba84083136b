//! One `request_completed` event per request.
//!
//! Besides method, path, status and latency the event names who made the
//! request and why it failed: `user_id` comes from the `Payload` the
//! authorization gate stored, `error_code` from the `ErrorCode` that
//! `AppError` attaches to every error response.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::request_trace::TraceId;
use crate::auth::Payload;
use crate::errors::ErrorCode;

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

/// What the completion event reports about a finished request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub status: StatusCode,
    /// Principal verified by the gate; `None` on open routes and rejections
    pub user_id: Option<i64>,
    /// Problem Details code of an error response
    pub error_code: Option<ErrorCode>,
}

impl Completion {
    pub fn from_response<B>(res: &ServiceResponse<B>) -> Self {
        Self {
            status: res.status(),
            user_id: res.request().extensions().get::<Payload>().map(|p| p.user_id),
            error_code: res.response().extensions().get::<ErrorCode>().copied(),
        }
    }

    fn from_error(err: &ActixError) -> Self {
        Self {
            status: err.as_response_error().status_code(),
            user_id: None,
            error_code: None,
        }
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .map(|id| id.0.clone())
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let completion = match &result {
                Ok(res) => Completion::from_response(res),
                Err(err) => Completion::from_error(err),
            };
            let duration_us = start.elapsed().as_micros() as u64;
            let status_code = completion.status.as_u16();
            let user_id = completion.user_id.map(|id| id.to_string()).unwrap_or_default();
            let error_code = completion.error_code.as_ref().map(ErrorCode::as_str).unwrap_or_default();

            if completion.status.is_server_error() {
                error!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, trace_id = %trace_id, user_id = %user_id, error_code, "request_completed");
            } else if completion.status.is_client_error() {
                warn!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, trace_id = %trace_id, user_id = %user_id, error_code, "request_completed");
            } else {
                info!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, trace_id = %trace_id, user_id = %user_id, "request_completed");
            }

            result
        })
    }
}

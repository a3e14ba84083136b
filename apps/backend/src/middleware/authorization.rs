//! Authorization middleware.
//!
//! Wrap a scope with an [`AuthorizationGate`] to require a valid bearer token
//! on every route inside it. On success the verified `Payload` is stored in
//! request extensions (read back through the `Principal` extractor); on
//! failure a 401 Problem Details response is returned and the inner service
//! is never called.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::{debug, warn};

use crate::auth::{AuthError, AuthorizationGate};
use crate::error::AppError;

impl<S, B> Transform<S, ServiceRequest> for AuthorizationGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthorizationGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthorizationGateMiddleware {
            service,
            gate: self.clone(),
        }))
    }
}

pub struct AuthorizationGateMiddleware<S> {
    service: S,
    gate: AuthorizationGate,
}

impl<S, B> Service<ServiceRequest> for AuthorizationGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // A header that is not valid visible ASCII cannot hold "<scheme> <token>".
        let verdict = match req.headers().get(header::AUTHORIZATION) {
            None => self.gate.authorize(None),
            Some(value) => match value.to_str() {
                Ok(raw) => self.gate.authorize(Some(raw)),
                Err(_) => Err(AuthError::InvalidAuthorizationHeaderFormat),
            },
        };

        match verdict {
            Ok(payload) => {
                debug!(user_id = payload.user_id, "request authorized");
                req.extensions_mut().insert(payload);

                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(err) => {
                let app_err = AppError::from(err);
                warn!(path = %req.path(), code = %app_err.code(), "authorization rejected");

                Box::pin(async move { Ok(req.error_response(app_err).map_into_right_body()) })
            }
        }
    }
}

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::token::verify_token;

/// Bearer-token guard for a mounted resource scope.
///
/// Applied per scope with `.wrap(AuthMiddleware)`, never globally; the auth
/// scope itself is mounted without it. A missing or invalid token
/// short-circuits with 401 before any handler in the scope runs. On success
/// the verified [`Claims`](crate::auth::token::Claims) are inserted into
/// request extensions for the `AuthenticatedUserId` extractor.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let bearer = req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match bearer {
            Some(token) => match verify_token(token) {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    let fut = self.service.call(req);
                    Box::pin(fut)
                }
                Err(app_err) => Box::pin(async move { Err(app_err.into()) }),
            },
            None => {
                let app_err = crate::error::AppError::Unauthorized("Missing token".into());
                Box::pin(async move { Err(app_err.into()) })
            }
        }
    }
}

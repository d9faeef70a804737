use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

use crate::auth::token::Claims;
use crate::error::AppError;

/// Extracts the authenticated user's id from request extensions.
///
/// Intended for handlers inside scopes wrapped by `AuthMiddleware`, which
/// verifies the bearer token and inserts the decoded claims. If no claims are
/// present the extractor answers 401, so a handler taking this argument can
/// never run unauthenticated even if the scope was mounted without the guard.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUserId(pub Uuid);

impl FromRequest for AuthenticatedUserId {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(Ok(AuthenticatedUserId(claims.sub))),
            None => {
                let err = AppError::Unauthorized("Authentication required".to_string());
                ready(Err(err.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::dev::Payload;
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[actix_rt::test]
    async fn test_authenticated_user_id_extractor_success() {
        let user_id = Uuid::new_v4();
        let req = test::TestRequest::default().to_http_request();
        req.extensions_mut().insert(Claims {
            sub: user_id,
            exp: 4_000_000_000,
        });

        let mut payload = Payload::None;
        let extracted = AuthenticatedUserId::from_request(&req, &mut payload).await;
        assert_eq!(extracted.unwrap().0, user_id);
    }

    #[actix_rt::test]
    async fn test_authenticated_user_id_extractor_failure() {
        let req = test::TestRequest::default().to_http_request();
        // No claims inserted into extensions

        let mut payload = Payload::None;
        let result = AuthenticatedUserId::from_request(&req, &mut payload).await;
        assert!(result.is_err());

        let response = result.unwrap_err().error_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

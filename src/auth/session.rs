use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::storage::CookieSessionStore;
use actix_session::{Session, SessionMiddleware};
use actix_web::cookie::{time::Duration, Key, SameSite};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::AppError;

pub const SESSION_COOKIE_NAME: &str = "session";
const SESSION_TTL_HOURS: i64 = 24;
const USER_ID_KEY: &str = "user_id";

/// Builds the cookie-backed session middleware.
///
/// One signed, httpOnly, `SameSite=Lax` cookie named `session` with a 24 hour
/// TTL. The `Secure` flag is only set outside local development. Attached
/// once at app construction, ahead of every route.
pub fn session_middleware(config: &AppConfig) -> SessionMiddleware<CookieSessionStore> {
    let key = Key::derive_from(config.session_secret.as_bytes());
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE_NAME.to_string())
        .cookie_path("/".to_string())
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Signed)
        .cookie_same_site(SameSite::Lax)
        .cookie_secure(config.environment.is_production())
        .session_lifecycle(
            PersistentSession::default().session_ttl(Duration::hours(SESSION_TTL_HOURS)),
        )
        .build()
}

/// Records the authentication handshake in the session at login.
pub fn persist_login(session: &Session, user_id: Uuid) -> Result<(), AppError> {
    session
        .insert(USER_ID_KEY, user_id)
        .map_err(|e| AppError::Internal(format!("Failed to persist session: {}", e)))
}

/// Drops all handshake state, invalidating the session cookie.
pub fn clear_session(session: &Session) {
    session.purge();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, Environment};
    use actix_web::{test, web, App, HttpResponse};

    fn test_config() -> AppConfig {
        AppConfig {
            host: "127.0.0.1".into(),
            port: 8000,
            base_path: "/api".into(),
            environment: Environment::Development,
            session_secret: "x".repeat(64),
            jwt_secret: "test".into(),
            allowed_origins: vec![],
            database_url: "postgres://test".into(),
        }
    }

    #[actix_rt::test]
    async fn test_login_sets_session_cookie() {
        let app = test::init_service(
            App::new().wrap(session_middleware(&test_config())).route(
                "/login",
                web::get().to(|session: Session| async move {
                    persist_login(&session, Uuid::new_v4()).unwrap();
                    HttpResponse::Ok().finish()
                }),
            ),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE_NAME)
            .expect("session cookie set");

        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        // Development config keeps the cookie usable over plain http.
        assert_ne!(cookie.secure(), Some(true));
    }

    #[actix_rt::test]
    async fn test_logout_purges_session_cookie() {
        let app = test::init_service(
            App::new()
                .wrap(session_middleware(&test_config()))
                .route(
                    "/login",
                    web::get().to(|session: Session| async move {
                        persist_login(&session, Uuid::new_v4()).unwrap();
                        HttpResponse::Ok().finish()
                    }),
                )
                .route(
                    "/logout",
                    web::get().to(|session: Session| async move {
                        clear_session(&session);
                        HttpResponse::Ok().finish()
                    }),
                ),
        )
        .await;

        // The middleware only writes a removal cookie for a request that
        // arrived with a session cookie, so log in first and carry it over.
        let login_resp =
            test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
        let session_cookie = login_resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE_NAME)
            .expect("session cookie set")
            .into_owned();

        let logout_resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/logout")
                .cookie(session_cookie)
                .to_request(),
        )
        .await;
        let removal = logout_resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE_NAME)
            .expect("removal cookie set");
        assert!(removal.value().is_empty());
    }
}

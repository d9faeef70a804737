//!
//! # CORS Gate
//!
//! Builds the cross-origin policy applied ahead of every route. A single
//! policy is in force: a configured allow-list of origins checked by
//! predicate. Requests without an `Origin` header (server-to-server,
//! non-browser clients) are never gated. Listed origins receive
//! credentials-enabled response headers; anything else is rejected and the
//! blocked origin is logged. Preflight `OPTIONS` requests are answered by the
//! middleware for all paths without reaching downstream handlers.

use actix_cors::Cors;
use actix_web::http::header;

use crate::config::AppConfig;

const PREFLIGHT_MAX_AGE_SECS: usize = 3600;

pub fn cors_gate(config: &AppConfig) -> Cors {
    let allowed = config.allowed_origins.clone();
    Cors::default()
        .allowed_origin_fn(move |origin, _req_head| {
            let permitted = origin
                .to_str()
                .map(|origin| allowed.iter().any(|entry| entry == origin))
                .unwrap_or(false);
            if !permitted {
                log::warn!("CORS blocked origin: {:?}", origin);
            }
            permitted
        })
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .supports_credentials()
        .max_age(PREFLIGHT_MAX_AGE_SECS)
}

use std::env;

/// Runtime environment the server was deployed into.
///
/// Drives the session cookie `Secure` flag and how much error detail
/// handlers are allowed to echo back to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Prefix every resource scope is mounted under, e.g. `/api`.
    pub base_path: String,
    pub environment: Environment,
    pub session_secret: String,
    pub jwt_secret: String,
    /// Origins permitted to make credentialed cross-origin requests.
    pub allowed_origins: Vec<String>,
    pub database_url: String,
}

/// Minimum length for the session signing secret. `Key::derive_from`
/// requires at least 64 bytes of key material.
pub const SESSION_SECRET_MIN_LEN: usize = 64;

const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:5173";

impl AppConfig {
    pub fn from_env() -> Self {
        let session_secret = env::var("SESSION_SECRET").expect("SESSION_SECRET must be set");
        assert!(
            session_secret.len() >= SESSION_SECRET_MIN_LEN,
            "SESSION_SECRET must be at least {} bytes",
            SESSION_SECRET_MIN_LEN
        );

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .expect("PORT must be a number"),
            base_path: env::var("BASE_PATH").unwrap_or_else(|_| "/api".to_string()),
            environment: match env::var("APP_ENV").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            session_secret,
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            allowed_origins: parse_origins(
                &env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGIN.to_string()),
            ),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

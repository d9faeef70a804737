pub mod extractors;
pub mod middleware;
pub mod password;
pub mod session;
pub mod token;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

pub use extractors::AuthenticatedUserId;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use session::{clear_session, persist_login, session_middleware};
pub use token::{generate_token, verify_token, Claims};

lazy_static! {
    // Display names: alphanumeric, underscores, hyphens
    static ref NAME_REGEX: regex::Regex = regex::Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// Payload for a user login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

/// Payload for a new user registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Between 3 and 32 characters; alphanumeric, underscores, hyphens.
    #[validate(
        length(min = 3, max = 32),
        regex(
            path = "NAME_REGEX",
            message = "Name must be alphanumeric, underscores, or hyphens"
        )
    )]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

/// Response after successful login or registration. Carries the bearer token
/// the client presents on every subsequent API call.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user_id: Uuid,
}

//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. Every error raised by middleware or a route handler funnels
//! through its `ResponseError` implementation, which renders the uniform JSON
//! envelope `{"errorCode": <code>, "message": <text>}` consumed by the client
//! wrapper.
//!
//! Internal failures (database, hashing, token signing) are logged server-side
//! and reported to clients with a generic message only; driver details and
//! backtraces never appear in a response body.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// Missing or invalid credentials (HTTP 401).
    Unauthorized(String),
    /// Malformed or semantically invalid request (HTTP 400).
    BadRequest(String),
    /// Requested resource does not exist (HTTP 404).
    NotFound(String),
    /// Failed input validation (HTTP 422).
    Validation(String),
    /// Unexpected server-side failure (HTTP 500).
    Internal(String),
    /// Database failure (HTTP 500). The wrapped detail is for logs only.
    Database(String),
}

impl AppError {
    /// Stable machine-readable code carried in every error envelope.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => "ACCESS_UNAUTHORIZED",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound(_) => "RESOURCE_NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Internal(_) | AppError::Database(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Message safe to echo back to the client.
    fn public_message(&self) -> &str {
        match self {
            AppError::Unauthorized(msg)
            | AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::Validation(msg) => msg,
            AppError::Internal(_) | AppError::Database(_) => "Internal Server Error",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::Database(msg) => write!(f, "Database Error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("{}", self);
        }
        HttpResponse::build(self.status_code()).json(json!({
            "errorCode": self.error_code(),
            "message": self.public_message(),
        }))
    }
}

/// `sqlx::Error::RowNotFound` maps to 404; everything else is a 500 whose
/// detail stays in the logs.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => AppError::Database(error.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::Validation(error.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::Unauthorized(error.to_string())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Internal(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn envelope(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.error_response();
        let status = response.status();
        let body = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[actix_rt::test]
    async fn test_error_envelopes() {
        let (status, body) = envelope(AppError::Unauthorized("Missing token".into())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["errorCode"], "ACCESS_UNAUTHORIZED");
        assert_eq!(body["message"], "Missing token");

        let (status, body) = envelope(AppError::BadRequest("Invalid input".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errorCode"], "BAD_REQUEST");

        let (status, body) = envelope(AppError::NotFound("No such workspace".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errorCode"], "RESOURCE_NOT_FOUND");

        let (status, body) = envelope(AppError::Validation("title too long".into())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errorCode"], "VALIDATION_ERROR");
    }

    #[actix_rt::test]
    async fn test_internal_errors_hide_detail() {
        let detail = "connection refused at 10.0.0.3:5432";
        let (status, body) = envelope(AppError::Database(detail.into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["errorCode"], "INTERNAL_SERVER_ERROR");
        assert_eq!(body["message"], "Internal Server Error");
        assert!(!body.to_string().contains(detail));
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let error: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(error, AppError::NotFound(_)));
    }
}

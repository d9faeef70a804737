use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Fallback code when a failure carries no `errorCode` of its own.
pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";

/// Per-request deadline. A request that has not completed by then surfaces
/// as an [`ApiError`] like any other failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of the current access token, read immediately before each send.
///
/// Implemented by [`SessionStore`](crate::client::store::SessionStore); the
/// indirection keeps the client constructible in tests without a real store.
pub trait TokenSource: Send + Sync {
    fn access_token(&self) -> Option<String>;
}

/// Normalized failure shape for every client-side error.
///
/// `error_code` comes from the server's JSON envelope when one is present;
/// transport errors, timeouts and bodyless responses all fall back to
/// [`UNKNOWN_ERROR_CODE`]. The original status and message are preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub error_code: String,
    pub status: Option<StatusCode>,
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "[{}] {}: {}", status, self.error_code, self.message),
            None => write!(f, "{}: {}", self.error_code, self.message),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> ApiError {
        ApiError {
            error_code: UNKNOWN_ERROR_CODE.to_string(),
            status: error.status(),
            message: error.to_string(),
        }
    }
}

/// Builds the exact `Authorization` header value for a stored token.
fn bearer_header_value(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Rewraps a non-success response into an [`ApiError`], pulling `errorCode`
/// out of the JSON body when the server provided one.
fn normalize_error(status: StatusCode, body: &[u8]) -> ApiError {
    let parsed: Option<Value> = serde_json::from_slice(body).ok();
    let error_code = parsed
        .as_ref()
        .and_then(|value| value.get("errorCode"))
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_ERROR_CODE)
        .to_string();
    let message = parsed
        .as_ref()
        .and_then(|value| value.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("Request failed")
        .to_string();

    ApiError {
        error_code,
        status: Some(status),
        message,
    }
}

/// HTTP client for the backend API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth: Arc<dyn TokenSource>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, auth: Arc<dyn TokenSource>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth,
        })
    }

    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::DELETE, path, None).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, url);

        // Read the token at send time, not construction time; a login or
        // logout between calls must take effect on the next request.
        if let Some(token) = self.auth.access_token() {
            request = request.header("Authorization", bearer_header_value(&token));
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(normalize_error(status, &bytes));
        }
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| ApiError {
            error_code: UNKNOWN_ERROR_CODE.to_string(),
            status: Some(status),
            message: format!("Invalid JSON response: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bearer_header_has_single_space() {
        assert_eq!(bearer_header_value("abc123"), "Bearer abc123");
    }

    #[test]
    fn test_normalize_error_extracts_error_code() {
        let body = br#"{"errorCode":"NOT_FOUND","message":"No such task"}"#;
        let error = normalize_error(StatusCode::NOT_FOUND, body);
        assert_eq!(error.error_code, "NOT_FOUND");
        assert_eq!(error.status, Some(StatusCode::NOT_FOUND));
        assert_eq!(error.message, "No such task");
    }

    #[test]
    fn test_normalize_error_defaults_to_unknown() {
        // Empty body
        let error = normalize_error(StatusCode::BAD_GATEWAY, b"");
        assert_eq!(error.error_code, UNKNOWN_ERROR_CODE);

        // JSON body without an errorCode field
        let error = normalize_error(StatusCode::BAD_REQUEST, br#"{"detail":"nope"}"#);
        assert_eq!(error.error_code, UNKNOWN_ERROR_CODE);

        // Non-JSON body
        let error = normalize_error(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops</html>");
        assert_eq!(error.error_code, UNKNOWN_ERROR_CODE);
    }

    #[test]
    fn test_client_attaches_current_token() {
        struct FixedToken(Option<String>);
        impl TokenSource for FixedToken {
            fn access_token(&self) -> Option<String> {
                self.0.clone()
            }
        }

        let auth = Arc::new(FixedToken(Some("abc123".into())));
        let client = ApiClient::new("http://localhost:8000/", auth.clone()).unwrap();
        assert_eq!(client.base_url, "http://localhost:8000");
        assert_eq!(
            auth.access_token().as_deref().map(bearer_header_value),
            Some("Bearer abc123".to_string())
        );
    }
}

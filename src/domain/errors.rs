//! Domain errors for the Hearth client.

use thiserror::Error;

use crate::domain::validation::FieldError;

/// Format field-level validation errors as `field: message, field: message`.
fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors that can occur when talking to the listings API or handling
/// its data locally.
///
/// Variants are `Clone` so a single failure can be shared with every
/// concurrent waiter on a cache entry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Invalid request parameters or malformed request (HTTP 400)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Missing or expired credentials (HTTP 401)
    #[error("Authentication required")]
    AuthenticationRequired,

    /// Authenticated but not permitted (HTTP 403)
    #[error("Access denied")]
    AccessDenied,

    /// The requested resource does not exist (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded, retry after waiting (HTTP 429)
    #[error("Rate limit exceeded")]
    RateLimited,

    /// The API server encountered an internal error (HTTP 5xx)
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// Network error occurred during request (no response received)
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out waiting for response
    #[error("Timeout waiting for response")]
    Timeout,

    /// JSON serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Malformed input caught before submission
    #[error("Validation failed: {}", format_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// Durable client storage read/write failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Unexpected response that fits no other variant
    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Returns true if this error is transient and should be retried.
    ///
    /// Transient errors are server errors (5xx), rate limiting, timeouts,
    /// and network failures. Client errors (4xx) are never retried.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ApiError::RateLimited
                | ApiError::Server { .. }
                | ApiError::Network(_)
                | ApiError::Timeout
        )
    }

    /// Create an error from an HTTP status code and response body.
    ///
    /// - 400: invalid request
    /// - 401: authentication required
    /// - 403: access denied
    /// - 404: not found
    /// - 429: rate limited
    /// - 5xx: server error
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        match status.as_u16() {
            400 => ApiError::InvalidRequest(body),
            401 => ApiError::AuthenticationRequired,
            403 => ApiError::AccessDenied,
            404 => ApiError::NotFound(body),
            429 => ApiError::RateLimited,
            s if (500..600).contains(&s) => ApiError::Server { status: s, body },
            _ => ApiError::Unknown(format!("HTTP {status}: {body}")),
        }
    }

    /// User-facing message for this error, suitable for direct display
    /// next to a retry affordance.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::InvalidRequest(_) => "The request was invalid. Please check your input.".to_string(),
            ApiError::AuthenticationRequired => "Please log in to continue.".to_string(),
            ApiError::AccessDenied => {
                "You don't have permission to perform this action.".to_string()
            }
            ApiError::NotFound(_) => "The requested resource was not found.".to_string(),
            ApiError::RateLimited => "Please wait a moment before trying again.".to_string(),
            ApiError::Server { .. } => {
                "Something went wrong on our end. Please try again later.".to_string()
            }
            ApiError::Network(_) | ApiError::Timeout => {
                "Unable to reach the server. Please check your connection and try again."
                    .to_string()
            }
            ApiError::Validation(errors) => format!("Validation failed: {}", format_field_errors(errors)),
            ApiError::Serialization(_) | ApiError::Storage(_) | ApiError::Unknown(_) => {
                "An unexpected error occurred.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Serialization(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_is_transient_rate_limited() {
        assert!(ApiError::RateLimited.is_transient());
    }

    #[test]
    fn test_is_transient_server_error() {
        let error = ApiError::Server {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert!(error.is_transient());
    }

    #[test]
    fn test_is_transient_timeout_and_network() {
        assert!(ApiError::Timeout.is_transient());
        assert!(ApiError::Network("connection refused".to_string()).is_transient());
    }

    #[test]
    fn test_client_errors_are_not_transient() {
        assert!(!ApiError::InvalidRequest("bad".to_string()).is_transient());
        assert!(!ApiError::AuthenticationRequired.is_transient());
        assert!(!ApiError::AccessDenied.is_transient());
        assert!(!ApiError::NotFound("missing".to_string()).is_transient());
    }

    #[test]
    fn test_from_status_400() {
        let error = ApiError::from_status(StatusCode::BAD_REQUEST, "bad params".to_string());
        assert!(matches!(error, ApiError::InvalidRequest(_)));
    }

    #[test]
    fn test_from_status_401() {
        let error = ApiError::from_status(StatusCode::UNAUTHORIZED, String::new());
        assert_eq!(error, ApiError::AuthenticationRequired);
    }

    #[test]
    fn test_from_status_403() {
        let error = ApiError::from_status(StatusCode::FORBIDDEN, String::new());
        assert_eq!(error, ApiError::AccessDenied);
    }

    #[test]
    fn test_from_status_404() {
        let error = ApiError::from_status(StatusCode::NOT_FOUND, "no such listing".to_string());
        assert!(matches!(error, ApiError::NotFound(_)));
    }

    #[test]
    fn test_from_status_429() {
        let error = ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, String::new());
        assert_eq!(error, ApiError::RateLimited);
    }

    #[test]
    fn test_from_status_5xx() {
        let error = ApiError::from_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            "server error".to_string(),
        );
        assert!(matches!(error, ApiError::Server { status: 500, .. }));

        let error = ApiError::from_status(StatusCode::BAD_GATEWAY, String::new());
        assert!(matches!(error, ApiError::Server { status: 502, .. }));
    }

    #[test]
    fn test_from_status_unknown() {
        let error = ApiError::from_status(StatusCode::IM_A_TEAPOT, "teapot".to_string());
        assert!(matches!(error, ApiError::Unknown(_)));
    }

    #[test]
    fn test_user_message_per_status() {
        assert_eq!(
            ApiError::AuthenticationRequired.user_message(),
            "Please log in to continue."
        );
        assert!(ApiError::AccessDenied.user_message().contains("permission"));
        assert!(ApiError::RateLimited.user_message().contains("wait"));
        assert!(ApiError::NotFound("x".to_string())
            .user_message()
            .contains("not found"));
    }

    #[test]
    fn test_validation_display_joins_fields() {
        let error = ApiError::Validation(vec![
            FieldError::new("price", "must be positive"),
            FieldError::new("title", "is required"),
        ]);
        let msg = error.to_string();
        assert!(msg.contains("price: must be positive"));
        assert!(msg.contains("title: is required"));
    }
}

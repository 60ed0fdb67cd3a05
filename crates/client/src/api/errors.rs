//! API-specific error types
//!
//! Provides error classification for API operations. The client never
//! retries; the category metadata exists so callers can implement their own
//! retry policy and map failures to user-facing messages.

use serde_json::Value;
use thiserror::Error;

/// Machine-readable code carried by the missing-token precondition failure.
pub const NO_TOKEN_CODE: &str = "NO_TOKEN";

/// Categories of API errors for caller-side retry logic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (missing token, 401, 403) - retry after token refresh
    Authentication,
    /// Rate limiting errors (429) - retry with backoff
    RateLimit,
    /// Server errors (5xx) - retryable
    Server,
    /// Client errors (4xx except auth, malformed bodies) - non-retryable
    Client,
    /// Network/connection errors - retryable
    Network,
    /// Configuration errors - non-retryable
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Raised locally, before any network call, when an operation that
    /// requires authentication is invoked without a usable access token.
    #[error("authentication required but no access token was provided")]
    NoToken,

    /// The backend delivered the request and rejected it with a non-2xx
    /// status. `message` is best-effort: the `message`/`detail` field of a
    /// JSON error body, falling back to the raw body text, then to the
    /// canonical status reason. `details` holds the parsed error body when
    /// it was valid JSON.
    #[error("HTTP {status}: {message}")]
    Status {
        status: u16,
        message: String,
        details: Option<Value>,
    },

    /// The request never produced an HTTP response (DNS, connect, aborted
    /// transfer, caller-configured transport timeout).
    #[error("network error: {0}")]
    Network(String),

    /// A 2xx response whose body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Client-side configuration problem (bad base URL, transport build
    /// failure, invalid environment variable).
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status observed on the wire.
    ///
    /// `NoToken` reports the 401 sentinel even though no request was made;
    /// transport-level failures carry no status at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NoToken => Some(401),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Machine-readable `code` field of the error details, if present.
    pub fn detail_code(&self) -> Option<&str> {
        match self {
            Self::NoToken => Some(NO_TOKEN_CODE),
            Self::Status { details, .. } => {
                details.as_ref().and_then(|d| d.get("code")).and_then(Value::as_str)
            }
            _ => None,
        }
    }

    /// Parsed error body, if the backend returned valid JSON.
    pub fn details(&self) -> Option<&Value> {
        match self {
            Self::Status { details, .. } => details.as_ref(),
            _ => None,
        }
    }

    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::NoToken => ApiErrorCategory::Authentication,
            Self::Status { status, .. } => match *status {
                401 | 403 => ApiErrorCategory::Authentication,
                429 => ApiErrorCategory::RateLimit,
                500..=599 => ApiErrorCategory::Server,
                _ => ApiErrorCategory::Client,
            },
            Self::Network(_) => ApiErrorCategory::Network,
            Self::MalformedResponse(_) => ApiErrorCategory::Client,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Check if a caller-side retry could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ApiErrorCategory::Authentication
                | ApiErrorCategory::RateLimit
                | ApiErrorCategory::Server
                | ApiErrorCategory::Network
        )
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(ApiError::NoToken.category(), ApiErrorCategory::Authentication);
        assert_eq!(
            ApiError::Status { status: 403, message: "forbidden".into(), details: None }
                .category(),
            ApiErrorCategory::Authentication
        );
        assert_eq!(
            ApiError::Status { status: 429, message: "slow down".into(), details: None }
                .category(),
            ApiErrorCategory::RateLimit
        );
        assert_eq!(
            ApiError::Status { status: 502, message: "bad gateway".into(), details: None }
                .category(),
            ApiErrorCategory::Server
        );
        assert_eq!(
            ApiError::Status { status: 404, message: "not found".into(), details: None }
                .category(),
            ApiErrorCategory::Client
        );
        assert_eq!(
            ApiError::Network("connection refused".into()).category(),
            ApiErrorCategory::Network
        );
    }

    #[test]
    fn test_should_retry() {
        assert!(ApiError::NoToken.is_retryable());
        assert!(ApiError::Network("reset".into()).is_retryable());
        assert!(
            ApiError::Status { status: 503, message: "unavailable".into(), details: None }
                .is_retryable()
        );
        assert!(
            !ApiError::Status { status: 422, message: "invalid".into(), details: None }
                .is_retryable()
        );
        assert!(!ApiError::Config("bad url".into()).is_retryable());
        assert!(!ApiError::MalformedResponse("not json".into()).is_retryable());
    }

    #[test]
    fn no_token_reports_sentinel_status_and_code() {
        let err = ApiError::NoToken;
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.detail_code(), Some(NO_TOKEN_CODE));
    }

    #[test]
    fn status_error_exposes_code_from_details() {
        let err = ApiError::Status {
            status: 409,
            message: "conflict".into(),
            details: Some(serde_json::json!({"code": "DUPLICATE", "field": "title"})),
        };
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.detail_code(), Some("DUPLICATE"));
    }

    #[test]
    fn network_errors_carry_no_status() {
        assert_eq!(ApiError::Network("dns failure".into()).status(), None);
    }
}

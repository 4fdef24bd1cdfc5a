//! # Common Error Types
//!
//! Consolidated error handling for the client library.
//!
//! All API and session operations return [`ApiError`]. Variants are split by
//! what the caller is expected to do with them:
//!
//! - **Network / Decode**: transport-level failures, generally retryable
//! - **Status**: the backend answered with a non-success code; the parsed
//!   backend error message is carried when the body had one
//! - **NotFound**: 404, which the autosave policy treats as "attempt already
//!   submitted"
//! - **Unauthorized**: 401 after the one refresh-and-replay attempt; on exam
//!   endpoints this is surfaced as a soft warning rather than a logout
//! - **SessionExpired**: refresh itself failed on a non-exam endpoint; the
//!   embedder should return the student to login
//! - **Validation**: client-side input rejection, nothing was sent

use thiserror::Error;

/// Client-wide error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: connection refused, timeout, DNS.
    #[error("network error: {0}")]
    Network(String),

    /// Backend returned a non-success status with an error body.
    #[error("backend error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected DTO shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Resource gone. On save-answer this means the attempt was already
    /// submitted and the session must deactivate.
    #[error("not found")]
    NotFound,

    /// Authentication failed and could not be recovered by a refresh.
    #[error("unauthorized")]
    Unauthorized,

    /// Refresh token rejected outside an exam flow; the login session is over.
    #[error("session expired")]
    SessionExpired,

    /// Input rejected before any request was made.
    #[error("validation error: {0}")]
    Validation(String),
}

impl ApiError {
    /// True for 404 responses, however they were classified.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
            || matches!(self, ApiError::Status { status: 404, .. })
    }

    /// True when the error is an auth failure (soft or hard).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::SessionExpired)
            || matches!(self, ApiError::Status { status: 401, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_predicate_covers_both_shapes() {
        assert!(ApiError::NotFound.is_not_found());
        assert!(ApiError::Status { status: 404, message: "gone".into() }.is_not_found());
        assert!(!ApiError::Status { status: 500, message: "boom".into() }.is_not_found());
    }

    #[test]
    fn test_unauthorized_predicate() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(ApiError::SessionExpired.is_unauthorized());
        assert!(!ApiError::Network("refused".into()).is_unauthorized());
    }
}

//! # Error normalization
//!
//! Every failed request collapses into a single [`HttpError`] carrying a
//! ready-to-display message. The message is derived from the status code
//! unless the server put its own message in the error envelope, which wins
//! for ordinary failures. The 408 branch is the exception: it always reports
//! the session as expired, whatever the server said, because that status is
//! the backend's signal that the bearer token is no longer valid.
//!
//! This module only classifies. Reacting to an expired session (dropping the
//! stored token, going back to the login page) is the session layer's job.

use serde_json::Value;
use thiserror::Error;

use crate::models::ApiResponse;

/// Failure taxonomy for a normalized [`HttpError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response was received at all.
    Network,
    /// 408: the bearer token was rejected as expired.
    SessionExpired,
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 500
    Server,
    /// Any other non-2xx status.
    Status,
    /// A 2xx body that did not match the envelope.
    Decode,
}

impl ErrorKind {
    fn classify(status: u16) -> Self {
        match status {
            408 => ErrorKind::SessionExpired,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            500 => ErrorKind::Server,
            _ => ErrorKind::Status,
        }
    }
}

/// Normalized error for a failed request.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct HttpError {
    pub kind: ErrorKind,
    /// User-facing message, ready to display.
    pub message: String,
    /// HTTP status, when a response was received.
    pub status: Option<u16>,
    /// Application error code from the envelope, when present.
    pub code: Option<i32>,
}

impl HttpError {
    /// The request never produced a response.
    pub(crate) fn network() -> Self {
        Self {
            kind: ErrorKind::Network,
            message: "network error".to_string(),
            status: None,
            code: None,
        }
    }

    /// A 2xx response whose body did not parse as the envelope.
    pub(crate) fn decode(status: u16) -> Self {
        Self {
            kind: ErrorKind::Decode,
            message: "invalid response body".to_string(),
            status: Some(status),
            code: None,
        }
    }

    /// Normalize a non-2xx response, preferring the server's own message
    /// over the per-status default when it supplied one.
    pub(crate) fn from_status(status: u16, envelope: Option<ApiResponse<Value>>) -> Self {
        let kind = ErrorKind::classify(status);
        let code = envelope.as_ref().map(|e| e.code);
        let server_message = envelope
            .map(|e| e.message)
            .filter(|message| !message.is_empty());

        let message = match kind {
            ErrorKind::SessionExpired => "session expired".to_string(),
            _ => server_message.unwrap_or_else(|| default_message(status)),
        };

        Self {
            kind,
            message,
            status: Some(status),
            code,
        }
    }
}

fn default_message(status: u16) -> String {
    match status {
        401 => "unauthorized".to_string(),
        403 => "forbidden".to_string(),
        404 => "resource not found".to_string(),
        500 => "server error".to_string(),
        other => format!("request failed: {other}"),
    }
}

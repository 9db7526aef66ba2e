//! API error taxonomy shared by every endpoint helper.
//!
//! ERROR HANDLING
//! ==============
//! Failures collapse into four cases the UI can act on: a rejected
//! credential or request (inline message), an expired session (forced
//! sign-out), a transport fault (retryable message), and an undecodable
//! response. No variant is fatal to the application.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Fallback text when a 4xx body carries no usable `message`.
const REJECTED_FALLBACK: &str = "Request was rejected. Please try again.";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server returned 401: the bearer token is invalid or expired.
    #[error("session is no longer valid")]
    Unauthorized,
    /// A 4xx rejection with the server's `message`, or a 200 body missing
    /// required fields (e.g. no token) which is treated the same way.
    #[error("{0}")]
    Rejected(String),
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// The response arrived but could not be decoded.
    #[error("unexpected response: {0}")]
    Protocol(String),
}

impl ApiError {
    /// Classify a non-2xx HTTP status plus the optional `message` from its
    /// body into the taxonomy above.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        ApiError::Rejected(message.unwrap_or_else(|| REJECTED_FALLBACK.to_owned()))
    }

    /// Text suitable for inline display next to a form or list.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Your session has expired. Please sign in again.".to_owned(),
            ApiError::Rejected(message) => message.clone(),
            ApiError::Transport(_) => "Could not reach the server. Please try again.".to_owned(),
            ApiError::Protocol(_) => "The server sent an unexpected response.".to_owned(),
        }
    }
}

/// Pull the `{"message": ...}` string out of an error body, if present.
pub(crate) fn message_from_body(body: &serde_json::Value) -> Option<String> {
    body.get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}

//! Error type for gateway calls.
//!
//! Three failure families, all handled identically at each call site: show
//! the server's message when there is one, a generic fallback otherwise, and
//! leave local state untouched.

use thiserror::Error;

/// A failed gateway call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response with a structured `{ "error": "..." }` body.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Non-2xx response without a usable error body.
    #[error("request failed with status {status}")]
    Status { status: u16 },

    /// The request never completed (DNS, connection, fetch abort).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(reqwest::Error),
}

impl ApiError {
    /// The message the server reported, if it reported one. Call sites show
    /// this to the user, falling back to their own generic wording.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => Some(message),
            _ => None,
        }
    }

    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } | ApiError::Status { status } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_only_for_structured_errors() {
        let err = ApiError::Server {
            status: 403,
            message: "Invalid token".to_string(),
        };
        assert_eq!(err.server_message(), Some("Invalid token"));
        assert_eq!(err.to_string(), "Invalid token");

        let bare = ApiError::Status { status: 500 };
        assert_eq!(bare.server_message(), None);
        assert_eq!(bare.status(), Some(500));
    }
}

//! Error taxonomy of the access layer.
//!
//! Every API call resolves to `Result<T, ApiError>`. Pages never see a panic or a
//! raw transport error; they branch on the variant.

use serde_json::Value;
use thiserror::Error;

/// Fallback message when the server sends no usable error text.
pub const GENERIC_ERROR: &str = "An error occurred";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// No session token is stored; the request was not sent.
    #[error("Authentication required")]
    Unauthenticated,

    /// The server answered 401; the stored session has been cleared.
    #[error("Session expired. Please login again.")]
    SessionExpired,

    /// Required input missing, detected client-side or reported by the server (400/422).
    #[error("{0}")]
    Validation(String),

    /// Any other non-2xx answer.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a response (network, CORS, DNS).
    #[error("Network error: {0}")]
    Transport(String),

    /// The response body was not the expected JSON.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// The session could not be written to local storage.
    #[error("Could not save session: {0}")]
    Storage(#[from] store::StoreError),
}

/// Result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Whether the error means the user must sign in again.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthenticated | ApiError::SessionExpired)
    }

    /// Build the error for a non-2xx, non-401 response.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = error_message(body);
        match status {
            400 | 422 => ApiError::Validation(message),
            _ => ApiError::Rejected { status, message },
        }
    }
}

/// Extract the human-readable message from an error body.
///
/// Looks at `detail` first (string, or the first `msg` of a validation list),
/// then `message`, then falls back to [`GENERIC_ERROR`].
pub fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return GENERIC_ERROR.to_string();
    };

    let detail = match value.get("detail") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Array(items)) => items
            .first()
            .and_then(|item| item.get("msg"))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    };

    detail
        .or_else(|| {
            value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| GENERIC_ERROR.to_string())
}

//! Error Types
//!
//! Failures of a background form submission. Missing page structure is not
//! an error: components treat it as "not on this page" and return early.

use crate::models::Severity;

/// Common result type for background submissions
pub type UiResult<T> = Result<T, UiError>;

/// Submission failures
#[derive(Debug, Clone, PartialEq)]
pub enum UiError {
    /// The request never produced a response (network, CORS, bad URL)
    Transport(String),
    /// The server answered with a non-2xx status
    Status(u16),
    /// The response body was not the expected JSON
    Decode(String),
    /// A well-formed reply reporting that the action failed
    Rejected(String),
}

impl UiError {
    /// Notification level used when this error is surfaced to the user
    pub fn severity(&self) -> Severity {
        match self {
            UiError::Rejected(_) => Severity::Warning,
            _ => Severity::Danger,
        }
    }

    /// User-facing text for the notification
    pub fn user_message(&self) -> &'static str {
        match self {
            UiError::Rejected(_) => "Action failed. Please try again.",
            _ => "Something went wrong. Please try again.",
        }
    }
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiError::Transport(msg) => write!(f, "Transport error: {}", msg),
            UiError::Status(code) => write!(f, "Unexpected status: {}", code),
            UiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            UiError::Rejected(status) => write!(f, "Rejected by server: {}", status),
        }
    }
}

impl std::error::Error for UiError {}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        UiError::Decode(err.to_string())
    }
}

//! Error taxonomy for gate operations.

use thiserror::Error;

/// Local form validation failures. The display text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Please accept the Terms of Service and Privacy Policy.")]
    TermsNotAccepted,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GateError {
    /// Rejected before any network call
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Network failure or unparsable response
    #[error("request failed: {0}")]
    Transport(String),

    /// Backend answered `success: false`
    #[error("rejected by backend: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    /// A submission of the same form is still in flight
    #[error("a request is already in flight")]
    InFlight,
}

impl GateError {
    /// Text for the user-facing notice.
    ///
    /// Validation errors carry their own text and rejections prefer the
    /// server's message. Anything else uses `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            GateError::Validation(v) => v.to_string(),
            GateError::Rejected {
                message: Some(message),
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

//! Error types for token issuing.

use thiserror::Error;

/// Errors that can occur while issuing a token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// A required input was empty or out of range.
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },

    /// A ttl string could not be parsed into a duration.
    #[error("invalid duration '{value}': {reason}")]
    InvalidDuration { value: String, reason: String },

    /// Encoding or signing the claims failed.
    #[error("failed to sign token: {0}")]
    Signing(String),
}

impl TokenError {
    pub(crate) fn empty(field: &'static str) -> Self {
        TokenError::InvalidInput {
            field,
            reason: "must not be empty",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        TokenError::Signing(err.to_string())
    }
}

//! Error types for URL resolution.

use livekit_tools_token::TokenError;
use thiserror::Error;

/// Errors that can occur while resolving a `livekit://` URL.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// URL uses a scheme other than `livekit`.
    #[error("invalid url scheme '{scheme}': expected 'livekit'")]
    InvalidScheme { scheme: String },

    /// URL could not be parsed at all.
    #[error("malformed url: {0}")]
    MalformedUrl(#[from] url::ParseError),

    /// URL has no host component.
    #[error("url has no host")]
    MissingHost,

    /// Token issuing failed, including an unparseable ttl.
    #[error(transparent)]
    Token(#[from] TokenError),
}

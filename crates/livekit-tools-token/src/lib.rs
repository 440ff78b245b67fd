//! # livekit-tools-token
//!
//! Access token issuing for LiveKit rooms.
//!
//! This crate provides functionality for:
//! - Holding an API key/secret pair used to sign tokens
//! - Building the video grant claims a LiveKit server expects
//! - Minting HS256 signed tokens with a bounded lifetime
//! - Parsing compact ttl strings such as `6h` or `1h30m`
//!
//! ## Token Layout
//!
//! | Segment | Contents |
//! |---------|----------|
//! | header | `{"typ":"JWT","alg":"HS256"}` |
//! | payload | `iss` (API key), `sub` (identity), `iat`, `nbf`, `exp`, `video` grants |
//! | signature | HMAC-SHA256 over `header.payload`, keyed by the API secret |
//!
//! Each segment is base64url encoded without padding and the three are joined
//! with `.`. Verification is left to the LiveKit server.

pub mod claims;
pub mod duration;
pub mod error;
pub mod keys;
pub mod token;

pub use claims::{Claims, VideoGrants};
pub use duration::{parse_ttl, DEFAULT_TTL};
pub use error::TokenError;
pub use keys::ApiCredentials;
pub use token::{issue, TokenBuilder, TokenOptions};

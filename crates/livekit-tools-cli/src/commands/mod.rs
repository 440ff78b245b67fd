//! CLI command implementations for livekit-tools.

pub mod token;
pub mod url;

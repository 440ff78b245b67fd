//! Fallback values for fields a `livekit://` URL leaves out.

/// The only accepted URL scheme.
pub const LIVEKIT_SCHEME: &str = "livekit";

/// LiveKit server port when the URL has none.
pub const DEFAULT_PORT: u16 = 7880;

/// The one port served over TLS. It is also left out of rendered URLs.
pub const SECURE_PORT: u16 = 443;

/// Dev server API key.
pub const DEFAULT_API_KEY: &str = "devkey";

/// Dev server API secret.
pub const DEFAULT_API_SECRET: &str = "secret";

pub use livekit_tools_token::DEFAULT_TTL;

/// Prefix of the generated identity, followed by the process id.
pub const IDENTITY_PREFIX: &str = "lkcli-";

/// Hosted meet page that accepts a custom server URL and token.
pub const MEET_URL: &str = "https://meet.livekit.io/custom";

/// Identity used when the URL has no user-info.
pub fn default_identity() -> String {
    format!("{}{}", IDENTITY_PREFIX, std::process::id())
}

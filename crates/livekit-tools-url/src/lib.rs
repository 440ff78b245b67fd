//! # livekit-tools-url
//!
//! Resolves `livekit://` URLs into everything a client needs to join a room.
//!
//! ```text
//! livekit://[identity@]host[:port]/[room][?api_key=K][&api_secret=S][&ttl=DUR]
//! ```
//!
//! Omitted fields fall back to the LiveKit dev server defaults listed in
//! [`defaults`]. The resolved [`ConnectionDescriptor`] carries a freshly signed
//! token and the `ws://` or `wss://` server URL.

pub mod defaults;
pub mod error;
pub mod params;
pub mod resolver;

pub use error::ResolveError;
pub use params::UrlParams;
pub use resolver::{resolve, resolve_at, ConnectionDescriptor};

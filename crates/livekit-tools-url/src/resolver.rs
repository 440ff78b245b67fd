//! `livekit://` URL resolution.

use crate::defaults::{default_identity, DEFAULT_PORT, LIVEKIT_SCHEME, MEET_URL, SECURE_PORT};
use crate::error::ResolveError;
use crate::params::UrlParams;
use chrono::{DateTime, Utc};
use livekit_tools_token::{parse_ttl, ApiCredentials, TokenBuilder};
use serde::Serialize;
use url::Url;

/// Everything needed to join a room, with a token already issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionDescriptor {
    /// `ws://host:port` or `wss://host`.
    #[serde(rename = "url")]
    pub server_url: String,
    pub token: String,
    pub api_key: String,
    pub api_secret: String,
    pub room: String,
    pub identity: String,
    /// The ttl as written in the URL, or the default.
    pub ttl: String,
}

impl ConnectionDescriptor {
    /// Link to the hosted meet page for this connection.
    pub fn join_url(&self) -> String {
        format!(
            "{}?liveKitUrl={}&token={}",
            MEET_URL, self.server_url, self.token
        )
    }
}

/// Resolve a `livekit://` URL, issuing the token at the current time.
pub fn resolve(raw_url: &str) -> Result<ConnectionDescriptor, ResolveError> {
    resolve_at(raw_url, Utc::now())
}

/// Resolve a `livekit://` URL with an explicit token issue time.
pub fn resolve_at(raw_url: &str, now: DateTime<Utc>) -> Result<ConnectionDescriptor, ResolveError> {
    let url = Url::parse(raw_url)?;
    if url.scheme() != LIVEKIT_SCHEME {
        return Err(ResolveError::InvalidScheme {
            scheme: url.scheme().to_string(),
        });
    }

    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or(ResolveError::MissingHost)?
        .to_ascii_lowercase();
    // Port 0 counts as unset.
    let port = url.port().filter(|p| *p != 0).unwrap_or(DEFAULT_PORT);
    let server_url = server_url(&host, port);

    let params = UrlParams::from_pairs(url.query_pairs());

    let identity = match url.username() {
        "" => default_identity(),
        name => name.to_string(),
    };

    let path = url.path();
    let room = path.strip_prefix('/').unwrap_or(path).to_string();

    let ttl = parse_ttl(params.ttl())?;
    let credentials = ApiCredentials::new(params.api_key(), params.api_secret())?;
    let token = TokenBuilder::new(credentials).issue_at(&room, &identity, ttl, now)?;

    tracing::debug!(
        server_url = %server_url,
        room = %room,
        identity = %identity,
        "resolved livekit url"
    );

    Ok(ConnectionDescriptor {
        server_url,
        token,
        api_key: params.api_key().to_string(),
        api_secret: params.api_secret().to_string(),
        room,
        identity,
        ttl: params.ttl().to_string(),
    })
}

/// Render the websocket URL, eliding the port when it is 443.
fn server_url(host: &str, port: u16) -> String {
    if port == SECURE_PORT {
        format!("wss://{}", host)
    } else {
        format!("ws://{}:{}", host, port)
    }
}

//! Token creation.

use crate::claims::{Claims, VideoGrants};
use crate::error::TokenError;
use crate::keys::ApiCredentials;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, Header};

/// Optional participant attributes written into the token.
#[derive(Debug, Clone, Default)]
pub struct TokenOptions {
    /// Display name.
    pub name: Option<String>,
    /// Opaque metadata string.
    pub metadata: Option<String>,
}

/// Builder for signed access tokens.
pub struct TokenBuilder {
    credentials: ApiCredentials,
}

impl TokenBuilder {
    /// Create a new token builder with the given credentials.
    pub fn new(credentials: ApiCredentials) -> Self {
        Self { credentials }
    }

    /// Issue a token that lets `identity` join `room` for `ttl`, starting now.
    pub fn issue(&self, room: &str, identity: &str, ttl: Duration) -> Result<String, TokenError> {
        self.issue_at(room, identity, ttl, Utc::now())
    }

    /// Issue a join token with an explicit issue time.
    ///
    /// Identical inputs give byte-identical tokens.
    pub fn issue_at(
        &self,
        room: &str,
        identity: &str,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        self.issue_with_grants(identity, VideoGrants::join(room), ttl, &TokenOptions::default(), now)
    }

    /// Issue a token carrying an arbitrary grant set.
    pub fn issue_with_grants(
        &self,
        identity: &str,
        grants: VideoGrants,
        ttl: Duration,
        options: &TokenOptions,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        if identity.is_empty() {
            return Err(TokenError::empty("identity"));
        }
        if ttl <= Duration::zero() {
            return Err(TokenError::InvalidInput {
                field: "ttl",
                reason: "must be positive",
            });
        }

        let mut claims = Claims::new(self.credentials.api_key(), identity, grants, now, ttl);
        claims.name = options.name.clone();
        claims.metadata = options.metadata.clone();

        // Sub-second ttls truncate to an empty window.
        if claims.exp <= claims.iat {
            return Err(TokenError::InvalidInput {
                field: "ttl",
                reason: "must be at least one second",
            });
        }

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.credentials.encoding_key(),
        )?;

        tracing::debug!(
            api_key = %claims.iss,
            identity = %claims.sub,
            room = %claims.video.room,
            ttl_secs = claims.exp - claims.iat,
            "issued access token"
        );

        Ok(token)
    }
}

/// Issue a room join token in one call.
pub fn issue(
    api_key: &str,
    api_secret: &str,
    room: &str,
    identity: &str,
    ttl: Duration,
) -> Result<String, TokenError> {
    let credentials = ApiCredentials::new(api_key, api_secret)?;
    TokenBuilder::new(credentials).issue(room, identity, ttl)
}

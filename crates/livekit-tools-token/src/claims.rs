//! Claims carried in a LiveKit access token.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Room permissions granted to the token holder.
///
/// Only `room_join` and `room` are set by the default issuing path. Every other
/// flag stays `None` and is left out of the payload, so adding a flag here never
/// changes the bytes of tokens that don't use it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrants {
    /// Permission to join `room`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_join: Option<bool>,

    /// Room the grant applies to. Empty means no specific room.
    #[serde(default)]
    pub room: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_create: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_list: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_record: Option<bool>,

    /// Permission to moderate `room` (mute, remove participants).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_admin: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_publish: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_subscribe: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_publish_data: Option<bool>,

    /// Participant is invisible to others in the room.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

impl VideoGrants {
    /// The minimal grant set: join exactly `room`.
    pub fn join(room: impl Into<String>) -> Self {
        Self {
            room_join: Some(true),
            room: room.into(),
            ..Default::default()
        }
    }

    /// Allow publishing tracks and data.
    pub fn with_publish(mut self, allowed: bool) -> Self {
        self.can_publish = Some(allowed);
        self.can_publish_data = Some(allowed);
        self
    }

    /// Allow subscribing to other participants' tracks.
    pub fn with_subscribe(mut self, allowed: bool) -> Self {
        self.can_subscribe = Some(allowed);
        self
    }

    /// Grant room moderation rights.
    pub fn with_admin(mut self, allowed: bool) -> Self {
        self.room_admin = Some(allowed);
        self
    }

    /// Check if the grant allows joining a room.
    pub fn can_join(&self) -> bool {
        self.room_join.unwrap_or(false)
    }

    /// Check if the grant is bound to a specific room.
    pub fn is_room_scoped(&self) -> bool {
        !self.room.is_empty()
    }
}

/// Full payload of a signed token.
///
/// Field order is the serialization order, which keeps the payload canonical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer: the API key whose secret signed the token.
    pub iss: String,

    /// Subject: the participant identity.
    pub sub: String,

    /// Issued at, seconds since the Unix epoch.
    pub iat: i64,

    /// Not before. Always equal to `iat`.
    pub nbf: i64,

    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,

    /// Display name shown to other participants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Opaque participant metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,

    pub video: VideoGrants,
}

impl Claims {
    /// Build claims valid from `issued_at` for `ttl`.
    pub fn new(
        api_key: impl Into<String>,
        identity: impl Into<String>,
        video: VideoGrants,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        let iat = issued_at.timestamp();
        Self {
            iss: api_key.into(),
            sub: identity.into(),
            iat,
            nbf: iat,
            exp: iat + ttl.num_seconds(),
            name: None,
            metadata: None,
            video,
        }
    }

    /// Length of the validity window.
    pub fn lifetime(&self) -> Duration {
        Duration::seconds(self.exp - self.iat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_join_grant_serializes_minimal_set() {
        let grants = VideoGrants::join("standup");
        let value = serde_json::to_value(&grants).unwrap();

        assert_eq!(value, json!({ "roomJoin": true, "room": "standup" }));
        assert!(grants.can_join());
        assert!(grants.is_room_scoped());
    }

    #[test]
    fn test_empty_room_is_kept_in_payload() {
        let grants = VideoGrants::join("");
        let value = serde_json::to_value(&grants).unwrap();

        assert_eq!(value["room"], "");
        assert!(!grants.is_room_scoped());
    }

    #[test]
    fn test_optional_flags_use_livekit_names() {
        let grants = VideoGrants::join("r")
            .with_publish(true)
            .with_subscribe(false)
            .with_admin(true);
        let value = serde_json::to_value(&grants).unwrap();

        assert_eq!(value["canPublish"], true);
        assert_eq!(value["canPublishData"], true);
        assert_eq!(value["canSubscribe"], false);
        assert_eq!(value["roomAdmin"], true);
        assert!(value.get("hidden").is_none());
    }

    #[test]
    fn test_older_payload_without_new_flags_parses() {
        let grants: VideoGrants = serde_json::from_str(r#"{"roomJoin":true,"room":"a"}"#).unwrap();
        assert_eq!(grants, VideoGrants::join("a"));
    }

    #[test]
    fn test_claims_window() {
        let issued_at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let claims = Claims::new("key", "alice", VideoGrants::join("r"), issued_at, Duration::hours(6));

        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.nbf, claims.iat);
        assert_eq!(claims.exp, 1_700_000_000 + 6 * 3600);
        assert_eq!(claims.lifetime(), Duration::hours(6));
    }
}

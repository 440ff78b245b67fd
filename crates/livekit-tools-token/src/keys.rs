//! API key material used to sign tokens.

use crate::error::TokenError;
use jsonwebtoken::EncodingKey;
use std::fmt;

/// An API key and its shared secret.
///
/// The key is written into the token as the issuer, the secret signs it.
#[derive(Clone)]
pub struct ApiCredentials {
    api_key: String,
    api_secret: String,
}

impl ApiCredentials {
    /// Create credentials, rejecting empty key or secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self, TokenError> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.is_empty() {
            return Err(TokenError::empty("api_key"));
        }
        if api_secret.is_empty() {
            return Err(TokenError::empty("api_secret"));
        }

        Ok(Self { api_key, api_secret })
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    #[cfg(test)]
    pub(crate) fn api_secret(&self) -> &str {
        &self.api_secret
    }

    pub(crate) fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(self.api_secret.as_bytes())
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_accessors() {
        let creds = ApiCredentials::new("devkey", "secret").unwrap();
        assert_eq!(creds.api_key(), "devkey");
        assert_eq!(creds.api_secret(), "secret");
    }

    #[test]
    fn test_empty_key_or_secret_rejected() {
        assert!(matches!(
            ApiCredentials::new("", "secret"),
            Err(TokenError::InvalidInput { field: "api_key", .. })
        ));
        assert!(matches!(
            ApiCredentials::new("devkey", ""),
            Err(TokenError::InvalidInput { field: "api_secret", .. })
        ));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = ApiCredentials::new("devkey", "super-secret").unwrap();
        let debug = format!("{:?}", creds);
        assert!(debug.contains("devkey"));
        assert!(!debug.contains("super-secret"));
    }
}

//! Query parameters of a `livekit://` URL.

use crate::defaults::{DEFAULT_API_KEY, DEFAULT_API_SECRET, DEFAULT_TTL};
use std::borrow::Cow;

/// Overrides read from the query string. `None` means use the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams {
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub ttl: Option<String>,
}

impl UrlParams {
    /// Collect known keys from decoded query pairs.
    ///
    /// The first non-blank value of a repeated key wins. Blank values count
    /// as absent and unknown keys are ignored.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Cow<'a, str>, Cow<'a, str>)>,
    {
        let mut params = Self::default();

        for (key, value) in pairs {
            if value.is_empty() {
                continue;
            }
            let slot = match key.as_ref() {
                "api_key" => &mut params.api_key,
                "api_secret" => &mut params.api_secret,
                "ttl" => &mut params.ttl,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        params
    }

    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or(DEFAULT_API_KEY)
    }

    pub fn api_secret(&self) -> &str {
        self.api_secret.as_deref().unwrap_or(DEFAULT_API_SECRET)
    }

    pub fn ttl(&self) -> &str {
        self.ttl.as_deref().unwrap_or(DEFAULT_TTL)
    }
}

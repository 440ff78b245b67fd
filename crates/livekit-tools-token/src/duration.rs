//! Compact ttl strings.

use crate::error::TokenError;
use chrono::Duration;

/// Token lifetime used when the caller doesn't pick one.
pub const DEFAULT_TTL: &str = "6h";

/// Parse a ttl string like "6h", "30m", "1h30m" or "2d" into a duration.
///
/// A bare integer is read as seconds. Zero parses fine here; rejecting a
/// non-positive lifetime is the issuer's job.
pub fn parse_ttl(s: &str) -> Result<Duration, TokenError> {
    let trimmed = s.trim();
    let invalid = |reason: String| TokenError::InvalidDuration {
        value: s.to_string(),
        reason,
    };

    if trimmed.is_empty() {
        return Err(invalid("empty duration".to_string()));
    }

    if let Ok(seconds) = trimmed.parse::<i64>() {
        return Duration::try_seconds(seconds).ok_or_else(|| invalid("out of range".to_string()));
    }

    let std_duration = humantime::parse_duration(trimmed).map_err(|e| invalid(e.to_string()))?;
    Duration::from_std(std_duration).map_err(|e| invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ttl() {
        assert_eq!(parse_ttl("6h").unwrap(), Duration::hours(6));
        assert_eq!(parse_ttl("30m").unwrap(), Duration::minutes(30));
        assert_eq!(parse_ttl("90s").unwrap(), Duration::seconds(90));
        assert_eq!(parse_ttl("2d").unwrap(), Duration::days(2));
        assert_eq!(parse_ttl("1h30m").unwrap(), Duration::minutes(90));
        assert_eq!(parse_ttl(" 1h 30m ").unwrap(), Duration::minutes(90));
    }

    #[test]
    fn test_bare_integer_is_seconds() {
        assert_eq!(parse_ttl("3600").unwrap(), Duration::hours(1));
        assert_eq!(parse_ttl("-5").unwrap(), Duration::seconds(-5));
    }

    #[test]
    fn test_default_ttl_parses() {
        assert_eq!(parse_ttl(DEFAULT_TTL).unwrap(), Duration::hours(6));
    }

    #[test]
    fn test_out_of_range_ttl() {
        for input in ["9223372036854775807", "-9223372036854775807", "300000000000y", "100000000000000y"] {
            let err = parse_ttl(input).unwrap_err();
            assert!(
                matches!(err, TokenError::InvalidDuration { ref value, .. } if value == input),
                "unexpected result for {input:?}: {err:?}"
            );
        }
    }

    #[test]
    fn test_invalid_ttl() {
        for input in ["notaduration", "", "h6", "1x"] {
            let err = parse_ttl(input).unwrap_err();
            assert!(
                matches!(err, TokenError::InvalidDuration { ref value, .. } if value == input),
                "unexpected result for {input:?}: {err:?}"
            );
        }
    }
}

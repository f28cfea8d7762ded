//! Human-readable serde format for timer durations (`"800ms"`, `"8s"`).

use serde::{self, Deserialize, Deserializer, Serializer};
use std::time::Duration;

pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{}ms", duration.as_millis()))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_duration_str(&s).map_err(serde::de::Error::custom)
}

/// Parses `<n>ms` or `<n>s`. Page timers never need coarser units.
pub fn parse_duration_str(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if let Some(val) = s.strip_suffix("ms") {
        let n: u64 = val.parse().map_err(|e| format!("invalid duration '{s}': {e}"))?;
        Ok(Duration::from_millis(n))
    } else if let Some(val) = s.strip_suffix('s') {
        let n: u64 = val.parse().map_err(|e| format!("invalid duration '{s}': {e}"))?;
        Ok(Duration::from_secs(n))
    } else {
        Err(format!("unknown duration format: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_millis_and_seconds() {
        assert_eq!(parse_duration_str("800ms").unwrap(), Duration::from_millis(800));
        assert_eq!(parse_duration_str("8s").unwrap(), Duration::from_secs(8));
        assert_eq!(parse_duration_str(" 500ms ").unwrap(), Duration::from_millis(500));
    }

    #[test]
    fn rejects_unknown_units() {
        assert!(parse_duration_str("2m").is_err());
        assert!(parse_duration_str("fast").is_err());
        assert!(parse_duration_str("-5ms").is_err());
    }
}

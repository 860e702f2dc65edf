//! Lenient parsing and canonical formatting of concert start times.
//!
//! Clients send `2025-01-01T20:00`, `2025-01-01 20:00:00`, or a full RFC 3339
//! timestamp. Stored values are zone-less; RFC 3339 input is converted to UTC
//! before the offset is dropped.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

use crate::types::LocalDateTime;

/// Canonical wire format for concert start times.
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const ACCEPTED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a start time in any accepted format.
pub fn parse(input: &str) -> Result<LocalDateTime, String> {
    let trimmed = input.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(with_offset.naive_utc());
    }

    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| format!("'{input}' is not a valid datetime (expected YYYY-MM-DDTHH:MM[:SS])"))
}

pub fn serialize<S: Serializer>(value: &LocalDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&value.format(FORMAT))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LocalDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}

/// Optional start times in partial updates.
pub mod option {
    use serde::{Deserialize, Deserializer};

    use crate::types::LocalDateTime;

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<LocalDateTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Timelike};

    use super::*;

    fn expected(h: u32, m: u32, s: u32) -> LocalDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn accepts_minutes_precision() {
        assert_eq!(parse("2025-01-01T20:00").unwrap(), expected(20, 0, 0));
    }

    #[test]
    fn accepts_space_separator_and_seconds() {
        assert_eq!(parse("2025-01-01 20:15:30").unwrap(), expected(20, 15, 30));
    }

    #[test]
    fn accepts_fractional_seconds() {
        let parsed = parse("2025-01-01T20:15:30.250").unwrap();
        assert_eq!(parsed.second(), 30);
        assert_eq!(parsed.nanosecond(), 250_000_000);
    }

    #[test]
    fn rfc3339_is_converted_to_utc() {
        assert_eq!(parse("2025-01-01T21:00:00+01:00").unwrap(), expected(20, 0, 0));
        assert_eq!(parse("2025-01-01T20:00:00Z").unwrap(), expected(20, 0, 0));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("amanha a noite").is_err());
        assert!(parse("2025-13-01T20:00").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn serializes_in_canonical_format() {
        #[derive(serde::Serialize)]
        struct Wrapper {
            #[serde(with = "crate::datetime")]
            at: LocalDateTime,
        }

        let json = serde_json::to_value(Wrapper { at: expected(20, 0, 0) }).unwrap();
        assert_eq!(json["at"], "2025-01-01T20:00:00");
    }
}

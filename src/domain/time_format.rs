//! `HH:MM` wire format for time-of-day fields.
//!
//! Event windows are entered by staff as `08:00` style strings. Seconds are
//! accepted on input (`08:00:00`) but never emitted.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer};

const HOUR_MINUTE: &str = "%H:%M";
const HOUR_MINUTE_SECOND: &str = "%H:%M:%S";

/// Parses `HH:MM` or `HH:MM:SS`.
///
/// # Errors
///
/// Returns a [`chrono::ParseError`] when neither format matches.
pub fn parse_time(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(raw.trim(), HOUR_MINUTE)
        .or_else(|_| NaiveTime::parse_from_str(raw.trim(), HOUR_MINUTE_SECOND))
}

/// Formats a time as `HH:MM`.
#[must_use]
pub fn format_time(time: NaiveTime) -> String {
    time.format(HOUR_MINUTE).to_string()
}

/// Serde adapter for `#[serde(with = "hhmm")]`.
pub mod hhmm {
    use super::{Deserialize, Deserializer, NaiveTime, Serializer, format_time, parse_time};

    /// Serializes as `HH:MM`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_time(*time))
    }

    /// Deserializes from `HH:MM` or `HH:MM:SS`.
    ///
    /// # Errors
    ///
    /// Fails when the string is not a valid time of day.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_time(&raw)
            .map_err(|e| serde::de::Error::custom(format!("invalid time {raw:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_formats() {
        assert_eq!(parse_time("08:00").ok(), NaiveTime::from_hms_opt(8, 0, 0));
        assert_eq!(parse_time("17:30:00").ok(), NaiveTime::from_hms_opt(17, 30, 0));
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("noon").is_err());
    }

    #[test]
    fn formats_without_seconds() {
        let Some(t) = NaiveTime::from_hms_opt(9, 5, 0) else {
            return;
        };
        assert_eq!(format_time(t), "09:05");
    }
}

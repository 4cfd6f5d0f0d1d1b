use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

// Naive layouts accepted after RFC 3339 fails; read as UTC
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A point in time as upstream data encodes it
///
/// Records carry either an ISO-8601 string or epoch milliseconds; callers
/// building ranges in Rust may also pass a `DateTime<Utc>` directly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    #[serde(skip)]
    Instant(DateTime<Utc>),
    EpochMillis(f64),
    Text(String),
}

impl Timestamp {
    /// Resolve to an instant, `None` when the value cannot be parsed
    pub fn to_instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Instant(at) => Some(*at),
            Timestamp::EpochMillis(ms) => {
                if !ms.is_finite() {
                    return None;
                }
                DateTime::from_timestamp_millis(ms.trunc() as i64)
            }
            Timestamp::Text(text) => parse_text(text),
        }
    }
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(at) = DateTime::parse_from_rfc3339(text) {
        return Some(at.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(at: DateTime<Utc>) -> Self {
        Timestamp::Instant(at)
    }
}

impl From<&str> for Timestamp {
    fn from(s: &str) -> Self {
        Timestamp::Text(s.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(s: String) -> Self {
        Timestamp::Text(s)
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Timestamp::EpochMillis(ms as f64)
    }
}

/// Records that may carry a timestamp
pub trait Timestamped {
    fn timestamp(&self) -> Option<&Timestamp>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let ts = Timestamp::from("2024-01-15T10:30:00+02:00");
        assert_eq!(
            ts.to_instant(),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_naive_and_date_only_as_utc() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(Timestamp::from("2024-01-15T00:00:00").to_instant(), Some(expected));
        assert_eq!(Timestamp::from("2024-01-15 00:00:00.000").to_instant(), Some(expected));
        assert_eq!(Timestamp::from("2024-01-15").to_instant(), Some(expected));
    }

    #[test]
    fn test_parse_epoch_millis() {
        let ts = Timestamp::from(1_705_276_800_000);
        assert_eq!(
            ts.to_instant(),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(Timestamp::EpochMillis(f64::NAN).to_instant(), None);
    }

    #[test]
    fn test_unparseable_text() {
        assert_eq!(Timestamp::from("not a date").to_instant(), None);
        assert_eq!(Timestamp::from("").to_instant(), None);
    }

    #[test]
    fn test_deserialize_untagged() {
        let text: Timestamp = serde_json::from_str(r#""2024-02-01""#).unwrap();
        assert_eq!(text, Timestamp::Text("2024-02-01".to_string()));

        let millis: Timestamp = serde_json::from_str("1705276800000").unwrap();
        assert_eq!(millis, Timestamp::EpochMillis(1_705_276_800_000.0));
    }
}

use super::ids::{SessionId, ZoneId};
use super::timestamp::{Timestamp, Timestamped};
use crate::constants::{FREE_THROW_ZONE, UNKNOWN_ZONE};
use crate::utils::{lenient, shot_type};
use serde::Deserialize;

/// Pre-aggregated drill outcome logged during practice
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PracticeEntry {
    /// `None` only when absent; unparseable values read as 0
    #[serde(default, deserialize_with = "lenient::count")]
    pub makes: Option<f64>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub attempts: Option<f64>,
    /// Single-attempt form: `made` with `attempts` defaulting to 1
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub made: bool,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub ts: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub zone_id: Option<ZoneId>,
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub is_three: bool,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub shot_type: Option<String>,
    #[serde(rename = "shotType", default, deserialize_with = "lenient::optional")]
    pub shot_type_camel: Option<String>,
    #[serde(default, deserialize_with = "lenient::strict_true")]
    pub pressured: bool,
    #[serde(rename = "type", default, deserialize_with = "lenient::optional")]
    pub entry_type: Option<String>,
    #[serde(skip)]
    pub session_id: SessionId,
}

/// A practice entry reduced to the fields metric evaluation needs
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeShot<'a> {
    pub makes: f64,
    pub attempts: f64,
    pub zone: &'a str,
    pub is_three: bool,
    pub off_dribble: bool,
    pub pressured: bool,
    pub free_throw: bool,
}

impl PracticeEntry {
    pub fn new(makes: f64, attempts: f64) -> Self {
        Self {
            makes: Some(makes),
            attempts: Some(attempts),
            ..Self::default()
        }
    }

    pub fn with_ts(mut self, ts: impl Into<Timestamp>) -> Self {
        self.ts = Some(ts.into());
        self
    }

    pub fn with_zone(mut self, zone: impl Into<ZoneId>) -> Self {
        self.zone_id = Some(zone.into());
        self
    }

    pub fn with_shot_type(mut self, shot_type: impl Into<String>) -> Self {
        self.shot_type = Some(shot_type.into());
        self
    }

    pub fn three(mut self) -> Self {
        self.is_three = true;
        self
    }

    pub fn pressured(mut self) -> Self {
        self.pressured = true;
        self
    }

    /// Zone bucket; missing or empty ids fall into `"unknown"`
    pub fn zone(&self) -> &str {
        self.zone_id
            .as_ref()
            .map(ZoneId::as_str)
            .filter(|zone| !zone.is_empty())
            .unwrap_or(UNKNOWN_ZONE)
    }

    pub fn shot_type(&self) -> Option<&str> {
        self.shot_type
            .as_deref()
            .or(self.shot_type_camel.as_deref())
    }

    /// Free throws are flagged by zone, by `type`, or by the shot-type label
    pub fn is_free_throw(&self) -> bool {
        self.zone_id
            .as_ref()
            .is_some_and(|zone| zone.as_str() == FREE_THROW_ZONE)
            || self.entry_type.as_deref() == Some("freethrow")
            || self.shot_type().is_some_and(shot_type::is_free_throw)
    }

    /// Resolve field fallbacks into plain counts
    ///
    /// Returns `None` for entries with no attempts, which contribute nothing.
    pub fn normalize(&self) -> Option<PracticeShot<'_>> {
        let attempts = match (self.attempts, self.makes) {
            (Some(attempts), _) => attempts.max(0.0),
            // made + implicit single attempt
            (None, None) => 1.0,
            (None, Some(_)) => 0.0,
        };
        if attempts == 0.0 {
            return None;
        }

        let makes = match self.makes {
            Some(makes) => makes,
            None if self.made => 1.0,
            None => 0.0,
        }
        .clamp(0.0, attempts);

        Some(PracticeShot {
            makes,
            attempts,
            zone: self.zone(),
            is_three: self.is_three,
            off_dribble: self.shot_type().is_some_and(shot_type::is_off_dribble),
            pressured: self.pressured,
            free_throw: self.is_free_throw(),
        })
    }
}

impl Timestamped for PracticeEntry {
    fn timestamp(&self) -> Option<&Timestamp> {
        self.ts.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_practice_entry_json_parsing() {
        let json_str = r#"{
            "makes": "4",
            "attempts": 5,
            "ts": 1705276800000,
            "zone_id": "nail",
            "shotType": "pull-up",
            "pressured": true
        }"#;

        let entry: PracticeEntry = serde_json::from_str(json_str).unwrap();
        let shot = entry.normalize().unwrap();

        assert_eq!(shot.makes, 4.0);
        assert_eq!(shot.attempts, 5.0);
        assert_eq!(shot.zone, "nail");
        assert!(shot.off_dribble);
        assert!(shot.pressured);
        assert!(!shot.free_throw);
        assert!(!shot.is_three);
    }

    #[test]
    fn test_made_flag_single_attempt() {
        let made: PracticeEntry = serde_json::from_str(r#"{"made": true}"#).unwrap();
        let shot = made.normalize().unwrap();
        assert_eq!((shot.makes, shot.attempts), (1.0, 1.0));

        let missed: PracticeEntry = serde_json::from_str(r#"{"made": false}"#).unwrap();
        let shot = missed.normalize().unwrap();
        assert_eq!((shot.makes, shot.attempts), (0.0, 1.0));
    }

    #[test]
    fn test_zero_attempts_skipped() {
        assert!(PracticeEntry::new(0.0, 0.0).normalize().is_none());

        let entry: PracticeEntry =
            serde_json::from_str(r#"{"makes": 3, "attempts": "0"}"#).unwrap();
        assert!(entry.normalize().is_none());

        // makes without attempts has nothing to divide by
        let entry: PracticeEntry = serde_json::from_str(r#"{"makes": 3}"#).unwrap();
        assert!(entry.normalize().is_none());
    }

    #[test]
    fn test_malformed_attempts_read_as_zero() {
        for json in [
            r#"{"makes": "x", "attempts": []}"#,
            r#"{"attempts": "abc"}"#,
            r#"{"made": true, "attempts": {}}"#,
        ] {
            let entry: PracticeEntry = serde_json::from_str(json).unwrap();
            assert_eq!(entry.attempts, Some(0.0), "{json}");
            assert!(entry.normalize().is_none(), "{json}");
        }

        // an explicit null is the same as leaving the field out
        let entry: PracticeEntry =
            serde_json::from_str(r#"{"made": true, "attempts": null}"#).unwrap();
        let shot = entry.normalize().unwrap();
        assert_eq!((shot.makes, shot.attempts), (1.0, 1.0));

        let entry: PracticeEntry =
            serde_json::from_str(r#"{"makes": "x", "attempts": 4}"#).unwrap();
        assert_eq!(entry.normalize().unwrap().makes, 0.0);
    }

    #[test]
    fn test_empty_zone_falls_back_to_unknown() {
        let entry = PracticeEntry::new(1.0, 2.0).with_zone("");
        assert_eq!(entry.normalize().unwrap().zone, "unknown");
        assert_eq!(PracticeEntry::new(1.0, 2.0).zone(), "unknown");
        assert_eq!(PracticeEntry::new(1.0, 2.0).with_zone("nail").zone(), "nail");
    }

    #[test]
    fn test_makes_clamped_to_attempts() {
        let shot_entry = PracticeEntry::new(7.0, 5.0);
        let shot = shot_entry.normalize().unwrap();
        assert_eq!(shot.makes, 5.0);

        let negative = PracticeEntry::new(-2.0, 5.0);
        assert_eq!(negative.normalize().unwrap().makes, 0.0);
    }

    #[test]
    fn test_free_throw_detection() {
        assert!(PracticeEntry::new(8.0, 10.0).with_zone("free_throw").is_free_throw());
        assert!(PracticeEntry::new(8.0, 10.0).with_shot_type("Free Throw").is_free_throw());
        assert!(PracticeEntry::new(8.0, 10.0).with_shot_type("FT").is_free_throw());

        let typed: PracticeEntry =
            serde_json::from_str(r#"{"makes": 8, "attempts": 10, "type": "freethrow"}"#).unwrap();
        assert!(typed.is_free_throw());

        assert!(!PracticeEntry::new(8.0, 10.0).with_zone("nail").is_free_throw());
    }
}

use super::ids::{EventId, SessionId, ZoneId};
use super::timestamp::{Timestamp, Timestamped};
use crate::constants::UNKNOWN_ZONE;
use crate::utils::{lenient, shot_type};
use serde::Deserialize;

/// Kind of a discrete in-game event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Shot,
    Freethrow,
    Assist,
    Rebound,
    Steal,
    #[default]
    #[serde(other)]
    Other,
}

/// A single in-game event as logged by the tracking front end
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameEvent {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub id: Option<EventId>,
    #[serde(rename = "type", default, deserialize_with = "kind_or_other")]
    pub kind: EventKind,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub ts: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub made: bool,
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub is_three: bool,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub zone_id: Option<ZoneId>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub shot_type: Option<String>,
    /// camelCase spelling used by older clients
    #[serde(rename = "shotType", default, deserialize_with = "lenient::optional")]
    pub shot_type_camel: Option<String>,
    #[serde(default, deserialize_with = "lenient::strict_true")]
    pub pressured: bool,
    /// Session the event was loaded from; not part of the wire format
    #[serde(skip)]
    pub session_id: SessionId,
}

impl GameEvent {
    /// Create an event of the given kind with every optional field unset
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Field-goal attempt
    pub fn shot(made: bool, is_three: bool) -> Self {
        Self {
            made,
            is_three,
            ..Self::new(EventKind::Shot)
        }
    }

    /// Free-throw attempt
    pub fn free_throw(made: bool) -> Self {
        Self {
            made,
            ..Self::new(EventKind::Freethrow)
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

    pub fn pressured(mut self) -> Self {
        self.pressured = true;
        self
    }

    /// Zone bucket, `"unknown"` when the event has none or it is empty
    pub fn zone(&self) -> &str {
        self.zone_id
            .as_ref()
            .map(ZoneId::as_str)
            .filter(|zone| !zone.is_empty())
            .unwrap_or(UNKNOWN_ZONE)
    }

    /// Shot-type label, `shot_type` taking precedence over `shotType`
    pub fn shot_type(&self) -> Option<&str> {
        self.shot_type
            .as_deref()
            .or(self.shot_type_camel.as_deref())
    }

    #[inline]
    pub fn is_off_dribble(&self) -> bool {
        self.shot_type().is_some_and(shot_type::is_off_dribble)
    }
}

impl Timestamped for GameEvent {
    fn timestamp(&self) -> Option<&Timestamp> {
        self.ts.as_ref()
    }
}

fn kind_or_other<'de, D>(deserializer: D) -> Result<EventKind, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(lenient::optional(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_event_json_parsing() {
        let json_str = r#"{
            "id": "evt_1",
            "type": "shot",
            "ts": "2024-01-15T10:30:00Z",
            "made": true,
            "is_three": true,
            "zone_id": "left_corner_3",
            "shotType": "Pull-up",
            "pressured": true
        }"#;

        let event: GameEvent = serde_json::from_str(json_str).unwrap();

        assert_eq!(event.id, Some(EventId::from("evt_1")));
        assert_eq!(event.kind, EventKind::Shot);
        assert_eq!(event.ts, Some(Timestamp::from("2024-01-15T10:30:00Z")));
        assert!(event.made);
        assert!(event.is_three);
        assert_eq!(event.zone(), "left_corner_3");
        assert_eq!(event.shot_type(), Some("Pull-up"));
        assert!(event.is_off_dribble());
        assert!(event.pressured);
    }

    #[test]
    fn test_missing_fields_default() {
        let event: GameEvent = serde_json::from_str(r#"{"type": "shot"}"#).unwrap();

        assert_eq!(event.kind, EventKind::Shot);
        assert!(!event.made);
        assert!(!event.is_three);
        assert!(!event.pressured);
        assert_eq!(event.zone(), "unknown");
        assert_eq!(event.ts, None);

        let blank: GameEvent =
            serde_json::from_str(r#"{"type": "shot", "zone_id": ""}"#).unwrap();
        assert_eq!(blank.zone(), "unknown");
    }

    #[test]
    fn test_malformed_fields_degrade() {
        let json_str = r#"{
            "type": "freethrow",
            "ts": {"nested": true},
            "made": 1,
            "zone_id": 42,
            "pressured": "true"
        }"#;

        let event: GameEvent = serde_json::from_str(json_str).unwrap();

        assert_eq!(event.kind, EventKind::Freethrow);
        assert_eq!(event.ts, None);
        assert!(event.made);
        assert_eq!(event.zone(), "unknown");
        assert!(!event.pressured);
    }

    #[test]
    fn test_unknown_and_missing_type() {
        let block: GameEvent = serde_json::from_str(r#"{"type": "block"}"#).unwrap();
        assert_eq!(block.kind, EventKind::Other);

        let untyped: GameEvent = serde_json::from_str(r#"{"made": true}"#).unwrap();
        assert_eq!(untyped.kind, EventKind::Other);

        let numeric: GameEvent = serde_json::from_str(r#"{"type": 3}"#).unwrap();
        assert_eq!(numeric.kind, EventKind::Other);
    }

    #[test]
    fn test_shot_type_prefers_snake_case() {
        let event: GameEvent = serde_json::from_str(
            r#"{"type": "shot", "shot_type": "off dribble", "shotType": "catch-and-shoot"}"#,
        )
        .unwrap();
        assert_eq!(event.shot_type(), Some("off dribble"));
        assert!(event.is_off_dribble());

        let event: GameEvent =
            serde_json::from_str(r#"{"type": "shot", "shot_type": null, "shotType": "pull up"}"#)
                .unwrap();
        assert!(event.is_off_dribble());
    }
}

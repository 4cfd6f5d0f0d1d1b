use super::ids::ZoneId;
use super::timestamp::Timestamp;
use crate::utils::lenient;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Inclusive date bounds for filtering records
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub start_date: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub end_date: Option<Timestamp>,
}

impl DateRange {
    pub fn new(start_date: Option<Timestamp>, end_date: Option<Timestamp>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    pub fn since(start_date: impl Into<Timestamp>) -> Self {
        Self::new(Some(start_date.into()), None)
    }

    pub fn until(end_date: impl Into<Timestamp>) -> Self {
        Self::new(None, Some(end_date.into()))
    }

    pub fn between(start_date: impl Into<Timestamp>, end_date: impl Into<Timestamp>) -> Self {
        Self::new(Some(start_date.into()), Some(end_date.into()))
    }

    /// Bounds that parse; an unparseable bound behaves as if absent
    pub fn active_bounds(&self) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
        (
            self.start_date.as_ref().and_then(Timestamp::to_instant),
            self.end_date.as_ref().and_then(Timestamp::to_instant),
        )
    }
}

/// Optional scoping for metric evaluation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricOptions {
    pub range: DateRange,
    pub zone_id: Option<ZoneId>,
}

impl MetricOptions {
    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    pub fn with_zone(mut self, zone: impl Into<ZoneId>) -> Self {
        self.zone_id = Some(zone.into());
        self
    }

    /// Zone used by zone-scoped metrics; an empty id counts as none
    pub fn zone(&self) -> Option<&str> {
        self.zone_id
            .as_ref()
            .map(ZoneId::as_str)
            .filter(|zone| !zone.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bound_is_inactive() {
        let range = DateRange::between("garbage", "2024-02-01");
        let (start, end) = range.active_bounds();
        assert!(start.is_none());
        assert!(end.is_some());
    }

    #[test]
    fn test_empty_zone_is_none() {
        assert_eq!(MetricOptions::default().with_zone("").zone(), None);
        assert_eq!(MetricOptions::default().with_zone("nail").zone(), Some("nail"));
    }

    #[test]
    fn test_date_range_json() {
        let range: DateRange =
            serde_json::from_str(r#"{"startDate": "2024-01-15", "endDate": 1706745600000}"#)
                .unwrap();
        assert_eq!(range.start_date, Some(Timestamp::from("2024-01-15")));
        assert_eq!(range.end_date, Some(Timestamp::EpochMillis(1_706_745_600_000.0)));
    }
}

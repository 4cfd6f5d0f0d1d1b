use super::event::GameEvent;
use super::ids::ZoneId;
use crate::aggregate::{aggregate_game_events, percentage};
use serde::Serialize;
use std::collections::BTreeMap;

/// Box-score style totals reduced from a list of game events
///
/// Percentages are kept at full precision; rounding happens when formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatSummary {
    pub assists: u32,
    pub rebounds: u32,
    pub steals: u32,
    pub fgm: u32,
    pub fga: u32,
    pub threes_made: u32,
    pub threes_att: u32,
    pub ft_makes: u32,
    pub ft_att: u32,
    pub off_dribble_makes: u32,
    pub off_dribble_att: u32,
    pub pressured_makes: u32,
    pub pressured_att: u32,
    pub total_points: u32,
    pub fg_pct: f64,
    pub efg_pct: f64,
    pub three_pct: f64,
    pub ft_pct: f64,
    /// Makes per zone; zones without a make are absent
    pub zone_fgm: BTreeMap<ZoneId, u32>,
    pub zone_fga: BTreeMap<ZoneId, u32>,
}

impl GameStatSummary {
    /// Aggregate an iterator of event references
    pub fn from_events<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a GameEvent>,
    {
        aggregate_game_events(events)
    }

    /// Field-goal attempts in a zone, 0 when the zone never appeared
    pub fn zone_attempts(&self, zone: &str) -> u32 {
        self.zone_fga.get(zone).copied().unwrap_or(0)
    }

    pub fn zone_makes(&self, zone: &str) -> u32 {
        self.zone_fgm.get(zone).copied().unwrap_or(0)
    }

    /// Field-goal percentage in a zone, 0 without attempts
    pub fn zone_fg_pct(&self, zone: &str) -> f64 {
        percentage(self.zone_makes(zone) as f64, self.zone_attempts(zone) as f64)
    }

    pub fn off_dribble_pct(&self) -> f64 {
        percentage(self.off_dribble_makes as f64, self.off_dribble_att as f64)
    }

    pub fn pressured_pct(&self) -> f64 {
        percentage(self.pressured_makes as f64, self.pressured_att as f64)
    }
}

use crate::aggregate::{aggregate_game_events, effective_fg_pct, percentage};
use crate::date_filter::filter_events_by_date;
use crate::types::{Context, GameEvent, Metric, MetricOptions, PracticeEntry, PracticeShot};
use std::collections::HashMap;

/// Borrowed record collection for one context
#[derive(Debug, Clone, Copy)]
pub enum SessionData<'a> {
    Game(&'a [GameEvent]),
    Practice(&'a [PracticeEntry]),
}

impl SessionData<'_> {
    pub fn context(&self) -> Context {
        match self {
            SessionData::Game(_) => Context::Game,
            SessionData::Practice(_) => Context::Practice,
        }
    }
}

/// Evaluate a metric over whichever collection `data` holds
pub fn compute_metric_value(
    metric_id: &str,
    data: SessionData<'_>,
    options: &MetricOptions,
) -> f64 {
    match data {
        SessionData::Game(events) => compute_game_metric_value(metric_id, events, options),
        SessionData::Practice(entries) => {
            compute_practice_metric_value(metric_id, entries, options)
        }
    }
}

/// Value of `metric_id` over game events, 0 for unknown metrics
pub fn compute_game_metric_value(
    metric_id: &str,
    events: &[GameEvent],
    options: &MetricOptions,
) -> f64 {
    let Some(metric) = Metric::parse(metric_id) else {
        return 0.0;
    };

    let filtered = filter_events_by_date(events, Some(&options.range));
    let stats = aggregate_game_events(filtered);

    match metric {
        Metric::EfgOverall => stats.efg_pct,
        Metric::ThreePctOverall => stats.three_pct,
        Metric::FtPct => stats.ft_pct,
        Metric::FgPctZone => match options.zone() {
            Some(zone) => stats.zone_fg_pct(zone),
            None => stats.fg_pct,
        },
        Metric::AttemptsZone => options
            .zone()
            .map(|zone| stats.zone_attempts(zone) as f64)
            .unwrap_or(0.0),
        Metric::OffDribbleFg => stats.off_dribble_pct(),
        Metric::PressuredFg => stats.pressured_pct(),
        Metric::Makes => stats.fgm as f64,
        Metric::Attempts => stats.fga as f64,
        Metric::PointsTotal => stats.total_points as f64,
        Metric::StealsTotal => stats.steals as f64,
        Metric::AssistsTotal => stats.assists as f64,
        Metric::ReboundsTotal => stats.rebounds as f64,
    }
}

/// Value of `metric_id` over practice entries
///
/// Free-throw entries only feed `ft_pct`; game-only metrics are always 0.
pub fn compute_practice_metric_value(
    metric_id: &str,
    entries: &[PracticeEntry],
    options: &MetricOptions,
) -> f64 {
    let Some(metric) = Metric::parse(metric_id) else {
        return 0.0;
    };
    if metric.is_game_only() {
        return 0.0;
    }

    let filtered = filter_events_by_date(entries, Some(&options.range));
    let tally =
        PracticeTally::from_shots(filtered.into_iter().filter_map(PracticeEntry::normalize));

    match metric {
        Metric::EfgOverall => effective_fg_pct(tally.fgm, tally.threes_made, tally.fga),
        Metric::ThreePctOverall => percentage(tally.threes_made, tally.threes_att),
        Metric::FtPct => percentage(tally.ft_makes, tally.ft_att),
        Metric::FgPctZone => match options.zone() {
            Some(zone) => {
                let (makes, attempts) = tally.zone(zone);
                percentage(makes, attempts)
            }
            None => percentage(tally.fgm, tally.fga),
        },
        Metric::AttemptsZone => options
            .zone()
            .map(|zone| tally.zone(zone).1)
            .unwrap_or(0.0),
        Metric::OffDribbleFg => percentage(tally.off_dribble_makes, tally.off_dribble_att),
        Metric::PressuredFg => percentage(tally.pressured_makes, tally.pressured_att),
        Metric::Makes => tally.fgm,
        Metric::Attempts => tally.fga,
        Metric::PointsTotal
        | Metric::StealsTotal
        | Metric::AssistsTotal
        | Metric::ReboundsTotal => 0.0,
    }
}

/// Running makes/attempts over normalized practice shots
#[derive(Debug, Default)]
struct PracticeTally<'a> {
    fgm: f64,
    fga: f64,
    threes_made: f64,
    threes_att: f64,
    ft_makes: f64,
    ft_att: f64,
    off_dribble_makes: f64,
    off_dribble_att: f64,
    pressured_makes: f64,
    pressured_att: f64,
    // zone -> (makes, attempts)
    zones: HashMap<&'a str, (f64, f64)>,
}

impl<'a> PracticeTally<'a> {
    fn from_shots<I>(shots: I) -> Self
    where
        I: Iterator<Item = PracticeShot<'a>>,
    {
        let mut tally = Self::default();
        for shot in shots {
            tally.add(&shot);
        }
        tally
    }

    fn add(&mut self, shot: &PracticeShot<'a>) {
        let (makes, attempts) = (shot.makes, shot.attempts);

        if shot.free_throw {
            self.ft_makes += makes;
            self.ft_att += attempts;
            return;
        }

        self.fgm += makes;
        self.fga += attempts;

        if shot.is_three {
            self.threes_made += makes;
            self.threes_att += attempts;
        }
        if shot.off_dribble {
            self.off_dribble_makes += makes;
            self.off_dribble_att += attempts;
        }
        if shot.pressured {
            self.pressured_makes += makes;
            self.pressured_att += attempts;
        }

        let zone = self.zones.entry(shot.zone).or_insert((0.0, 0.0));
        zone.0 += makes;
        zone.1 += attempts;
    }

    fn zone(&self, zone: &str) -> (f64, f64) {
        self.zones.get(zone).copied().unwrap_or((0.0, 0.0))
    }
}

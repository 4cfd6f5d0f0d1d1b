use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a goal is tracked against game events or practice entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    #[default]
    Game,
    Practice,
}

/// How a metric value is interpreted and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Percent,
    Count,
}

/// Every metric a goal can track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    EfgOverall,
    ThreePctOverall,
    FtPct,
    FgPctZone,
    AttemptsZone,
    OffDribbleFg,
    PressuredFg,
    Makes,
    Attempts,
    PointsTotal,
    StealsTotal,
    AssistsTotal,
    ReboundsTotal,
}

/// Selection entry for metric pickers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl Metric {
    pub const ALL: [Metric; 13] = [
        Metric::EfgOverall,
        Metric::ThreePctOverall,
        Metric::FtPct,
        Metric::FgPctZone,
        Metric::AttemptsZone,
        Metric::OffDribbleFg,
        Metric::PressuredFg,
        Metric::Makes,
        Metric::Attempts,
        Metric::PointsTotal,
        Metric::StealsTotal,
        Metric::AssistsTotal,
        Metric::ReboundsTotal,
    ];

    /// Parse an identifier, `None` for anything not in the catalog
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|metric| metric.as_str() == id)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::EfgOverall => "efg_overall",
            Metric::ThreePctOverall => "three_pct_overall",
            Metric::FtPct => "ft_pct",
            Metric::FgPctZone => "fg_pct_zone",
            Metric::AttemptsZone => "attempts_zone",
            Metric::OffDribbleFg => "off_dribble_fg",
            Metric::PressuredFg => "pressured_fg",
            Metric::Makes => "makes",
            Metric::Attempts => "attempts",
            Metric::PointsTotal => "points_total",
            Metric::StealsTotal => "steals_total",
            Metric::AssistsTotal => "assists_total",
            Metric::ReboundsTotal => "rebounds_total",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::EfgOverall => "eFG% (overall)",
            Metric::ThreePctOverall => "3PT% (overall)",
            Metric::FtPct => "FT%",
            Metric::FgPctZone => "FG% by zone",
            Metric::AttemptsZone => "Attempts by zone",
            Metric::OffDribbleFg => "Off-dribble FG%",
            Metric::PressuredFg => "Pressured FG%",
            Metric::Makes => "Makes",
            Metric::Attempts => "Attempts",
            Metric::PointsTotal => "Total points",
            Metric::StealsTotal => "Steals",
            Metric::AssistsTotal => "Assists",
            Metric::ReboundsTotal => "Rebounds",
        }
    }

    pub fn kind(&self) -> MetricKind {
        match self {
            Metric::EfgOverall
            | Metric::ThreePctOverall
            | Metric::FtPct
            | Metric::FgPctZone
            | Metric::OffDribbleFg
            | Metric::PressuredFg => MetricKind::Percent,
            Metric::Makes
            | Metric::Attempts
            | Metric::AttemptsZone
            | Metric::PointsTotal
            | Metric::StealsTotal
            | Metric::AssistsTotal
            | Metric::ReboundsTotal => MetricKind::Count,
        }
    }

    /// Metrics practice logs cannot produce; they evaluate to 0 there
    pub fn is_game_only(&self) -> bool {
        matches!(
            self,
            Metric::PointsTotal | Metric::StealsTotal | Metric::AssistsTotal | Metric::ReboundsTotal
        )
    }

    /// Whether the metric reads the goal's zone
    pub fn is_zone_scoped(&self) -> bool {
        matches!(self, Metric::FgPctZone | Metric::AttemptsZone)
    }

    pub fn option(&self) -> MetricOption {
        MetricOption {
            value: self.as_str(),
            label: self.label(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMetric(pub String);

impl fmt::Display for UnknownMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown metric '{}'", self.0)
    }
}

impl std::error::Error for UnknownMetric {}

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownMetric(s.to_string()))
    }
}

/// Metrics available in both game and practice contexts
pub const BASE_METRIC_OPTIONS: &[MetricOption] = &[
    MetricOption { value: "efg_overall", label: "eFG% (overall)" },
    MetricOption { value: "three_pct_overall", label: "3PT% (overall)" },
    MetricOption { value: "ft_pct", label: "FT%" },
    MetricOption { value: "fg_pct_zone", label: "FG% by zone" },
    MetricOption { value: "attempts_zone", label: "Attempts by zone" },
    MetricOption { value: "off_dribble_fg", label: "Off-dribble FG%" },
    MetricOption { value: "pressured_fg", label: "Pressured FG%" },
    MetricOption { value: "makes", label: "Makes" },
    MetricOption { value: "attempts", label: "Attempts" },
];

/// Metrics only game events can produce
pub const GAME_ONLY_METRIC_OPTIONS: &[MetricOption] = &[
    MetricOption { value: "points_total", label: "Total points" },
    MetricOption { value: "steals_total", label: "Steals" },
    MetricOption { value: "assists_total", label: "Assists" },
    MetricOption { value: "rebounds_total", label: "Rebounds" },
];

/// Options a picker should offer for the given context
pub fn metric_options(context: Context) -> Vec<MetricOption> {
    match context {
        Context::Game => BASE_METRIC_OPTIONS
            .iter()
            .chain(GAME_ONLY_METRIC_OPTIONS)
            .copied()
            .collect(),
        Context::Practice => BASE_METRIC_OPTIONS.to_vec(),
    }
}

pub fn metric_is_percent(id: &str) -> bool {
    Metric::parse(id).is_some_and(|metric| metric.kind() == MetricKind::Percent)
}

pub fn metric_is_count(id: &str) -> bool {
    Metric::parse(id).is_some_and(|metric| metric.kind() == MetricKind::Count)
}

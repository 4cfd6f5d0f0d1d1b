pub mod event;
pub mod goal;
pub mod ids;
pub mod metric;
pub mod options;
pub mod practice;
pub mod session;
pub mod summary;
pub mod timestamp;

pub use event::{EventKind, GameEvent};
pub use goal::{GoalProgress, GoalRequest};
pub use ids::{EventId, SessionId, ZoneId};
pub use metric::{
    BASE_METRIC_OPTIONS, Context, GAME_ONLY_METRIC_OPTIONS, Metric, MetricKind, MetricOption,
    UnknownMetric, metric_is_count, metric_is_percent, metric_options,
};
pub use options::{DateRange, MetricOptions};
pub use practice::{PracticeEntry, PracticeShot};
pub use session::SessionSnapshot;
pub use summary::GameStatSummary;
pub use timestamp::{Timestamp, Timestamped};

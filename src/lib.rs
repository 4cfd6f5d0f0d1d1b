// Module declarations
pub mod aggregate;
pub mod constants;
pub mod date_filter;
pub mod error;
pub mod evaluate;
pub mod formatting;
pub mod goal;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use aggregate::aggregate_game_events;
pub use date_filter::filter_events_by_date;
pub use error::{HoopError, Result};
pub use evaluate::{
    SessionData, compute_game_metric_value, compute_metric_value, compute_practice_metric_value,
};
pub use formatting::format_metric_value;
pub use goal::{EventStore, evaluate_goal, goal_progress};
pub use types::{
    BASE_METRIC_OPTIONS, Context, DateRange, EventKind, GAME_ONLY_METRIC_OPTIONS, GameEvent,
    GameStatSummary, GoalProgress, GoalRequest, Metric, MetricOption, MetricOptions,
    PracticeEntry, SessionSnapshot, Timestamp, ZoneId, metric_is_count, metric_is_percent,
};

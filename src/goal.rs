use crate::error::Result;
use crate::evaluate::{SessionData, compute_metric_value};
use crate::types::{Context, GameEvent, GoalProgress, GoalRequest, PracticeEntry, SessionSnapshot};
use tracing::debug;

/// Source of the raw logs a goal is measured against
#[cfg_attr(test, mockall::automock)]
pub trait EventStore {
    fn game_events(&self) -> Result<Vec<GameEvent>>;
    fn practice_entries(&self) -> Result<Vec<PracticeEntry>>;
}

impl EventStore for SessionSnapshot {
    fn game_events(&self) -> Result<Vec<GameEvent>> {
        Ok(self.game_events.clone())
    }

    fn practice_entries(&self) -> Result<Vec<PracticeEntry>> {
        Ok(self.practice_entries.clone())
    }
}

/// Evaluate a goal against already loaded data
pub fn goal_progress(goal: &GoalRequest, data: SessionData<'_>) -> GoalProgress {
    let value = compute_metric_value(&goal.metric_id, data, &goal.options());
    debug!(
        metric = %goal.metric_id,
        context = ?data.context(),
        value,
        "evaluated goal"
    );
    GoalProgress::from_value(goal, value)
}

/// Load only the collection the goal's context needs, then evaluate it
pub fn evaluate_goal<S>(store: &S, goal: &GoalRequest) -> Result<GoalProgress>
where
    S: EventStore + ?Sized,
{
    let progress = match goal.context {
        Context::Game => {
            let events = store.game_events()?;
            goal_progress(goal, SessionData::Game(&events))
        }
        Context::Practice => {
            let entries = store.practice_entries()?;
            goal_progress(goal, SessionData::Practice(&entries))
        }
    };
    Ok(progress)
}

use super::ids::ZoneId;
use super::metric::{Context, Metric};
use super::options::{DateRange, MetricOptions};
use crate::formatting::format_metric_value;
use crate::utils::lenient;
use colored::{ColoredString, Colorize};
use serde::Deserialize;
use std::fmt;

/// A goal as configured in the front end
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRequest {
    pub metric_id: String,
    #[serde(default, deserialize_with = "context_or_game")]
    pub context: Context,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub zone_id: Option<ZoneId>,
    #[serde(flatten)]
    pub range: DateRange,
    #[serde(default, deserialize_with = "lenient::number_like")]
    pub target: Option<f64>,
}

impl GoalRequest {
    pub fn new(metric_id: impl Into<String>, context: Context) -> Self {
        Self {
            metric_id: metric_id.into(),
            context,
            ..Self::default()
        }
    }

    /// Evaluation options derived from the goal's zone and date range
    pub fn options(&self) -> MetricOptions {
        MetricOptions {
            range: self.range.clone(),
            zone_id: self.zone_id.clone(),
        }
    }

    /// Display label, falling back to the raw id for unknown metrics
    pub fn label(&self) -> &str {
        Metric::parse(&self.metric_id)
            .map(|metric| metric.label())
            .unwrap_or(self.metric_id.as_str())
    }
}

fn context_or_game<'de, D>(deserializer: D) -> Result<Context, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(lenient::optional(deserializer)?.unwrap_or_default())
}

/// Current value of a goal's metric against its target
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub metric_id: String,
    pub label: String,
    pub value: f64,
    pub target: Option<f64>,
}

impl GoalProgress {
    pub fn from_value(goal: &GoalRequest, value: f64) -> Self {
        Self {
            metric_id: goal.metric_id.clone(),
            label: goal.label().to_string(),
            value,
            target: goal.target,
        }
    }

    pub fn formatted_value(&self) -> String {
        format_metric_value(&self.metric_id, Some(self.value))
    }

    pub fn formatted_target(&self) -> Option<String> {
        self.target
            .map(|target| format_metric_value(&self.metric_id, Some(target)))
    }

    /// Share of the target reached, clamped to `[0, 1]`
    ///
    /// `None` without a positive target.
    pub fn completion(&self) -> Option<f64> {
        let target = self.target.filter(|t| t.is_finite() && *t > 0.0)?;
        Some((self.value / target).clamp(0.0, 1.0))
    }

    pub fn is_met(&self) -> bool {
        self.completion().is_some_and(|c| c >= 1.0)
    }

    /// Get a colored string representation for terminal output
    pub fn to_colored_string(&self) -> ColoredString {
        let text = self.to_string();
        match self.completion() {
            Some(c) if c >= 1.0 => text.green(),
            Some(c) if c >= 0.5 => text.yellow(),
            Some(_) => text.red(),
            None => text.normal(),
        }
    }
}

impl fmt::Display for GoalProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.formatted_value())?;
        if let (Some(target), Some(completion)) = (self.formatted_target(), self.completion()) {
            write!(f, " / {} ({}%)", target, (completion * 100.0).round() as u32)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_request_json() {
        let json_str = r#"{
            "metricId": "fg_pct_zone",
            "context": "practice",
            "zoneId": "nail",
            "startDate": "2024-01-01",
            "endDate": 1706745600000,
            "target": "55"
        }"#;

        let goal: GoalRequest = serde_json::from_str(json_str).unwrap();

        assert_eq!(goal.metric_id, "fg_pct_zone");
        assert_eq!(goal.context, Context::Practice);
        assert_eq!(goal.target, Some(55.0));
        assert_eq!(goal.label(), "FG% by zone");

        let options = goal.options();
        assert_eq!(options.zone(), Some("nail"));
        assert!(options.range.start_date.is_some());
        assert!(options.range.end_date.is_some());
    }

    #[test]
    fn test_goal_request_defaults() {
        let goal: GoalRequest =
            serde_json::from_str(r#"{"metricId": "blocks", "context": "scrimmage"}"#).unwrap();

        assert_eq!(goal.context, Context::Game);
        assert_eq!(goal.target, None);
        assert_eq!(goal.label(), "blocks");
        assert_eq!(goal.options(), MetricOptions::default());
    }

    #[test]
    fn test_progress_completion() {
        let mut goal = GoalRequest::new("efg_overall", Context::Game);
        goal.target = Some(50.0);

        let halfway = GoalProgress::from_value(&goal, 25.0);
        assert_eq!(halfway.completion(), Some(0.5));
        assert!(!halfway.is_met());

        let beyond = GoalProgress::from_value(&goal, 62.5);
        assert_eq!(beyond.completion(), Some(1.0));
        assert!(beyond.is_met());

        goal.target = Some(0.0);
        assert_eq!(GoalProgress::from_value(&goal, 10.0).completion(), None);
    }

    #[test]
    fn test_progress_display() {
        let mut goal = GoalRequest::new("efg_overall", Context::Game);
        goal.target = Some(50.0);

        let progress = GoalProgress::from_value(&goal, 41.666_666);
        assert_eq!(progress.to_string(), "eFG% (overall) 41.7% / 50% (83%)");
        assert!(progress.to_colored_string().to_string().contains("41.7%"));

        let practice_goal = GoalRequest::new("makes", Context::Practice);
        let untargeted = GoalProgress::from_value(&practice_goal, 12.0);
        assert_eq!(untargeted.to_string(), "Makes 12");
        assert_eq!(untargeted.formatted_target(), None);
    }
}

use colored::Colorize;
use std::io;
use tracing_subscriber::EnvFilter;

// Import from organized modules
use hoopstats::Result;
use hoopstats::constants::LOG_ENV;
use hoopstats::error::HoopError;
use hoopstats::formatting::format_number_with_commas;
use hoopstats::goal::goal_progress;
use hoopstats::types::{Context, GoalRequest, Metric};
use hoopstats::utils::{get_data_paths, load_all_data};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays a single status line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // Configure rayon thread pool for optimal performance
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_cpus::get())
        .thread_name(|i| format!("hoopstats-worker-{}", i))
        .build_global()?;

    // Force colored output even when not in a TTY
    colored::control::set_override(true);

    // Read the goal request directly from stdin using stream processing
    let goal: GoalRequest = serde_json::from_reader(io::stdin())?;

    let data_paths = get_data_paths();
    if data_paths.is_empty() {
        return Err(HoopError::DataDirNotFound);
    }

    let snapshot = load_all_data(&data_paths).await?;
    let progress = goal_progress(&goal, snapshot.data(goal.context));

    println!(
        "{reset_color}🏀 {context}{zone} {progress} {records}",
        reset_color = "\x1b[0m",
        context = context_name(goal.context),
        zone = goal
            .zone_id
            .as_ref()
            .filter(|_| Metric::parse(&goal.metric_id).is_some_and(|m| m.is_zone_scoped()))
            .map(|zone| format!(" @{}", zone.as_str().magenta()))
            .unwrap_or_default(),
        progress = progress.to_colored_string(),
        records = format!(
            "({} records, {} sessions)",
            format_number_with_commas(snapshot.record_count(goal.context)),
            format_number_with_commas(snapshot.session_count(goal.context))
        )
        .dimmed(),
    );

    Ok(())
}

#[inline]
fn context_name(context: Context) -> colored::ColoredString {
    match context {
        Context::Game => "game".cyan(),
        Context::Practice => "practice".green(),
    }
}

/// Zone bucket used when an event or entry carries no `zone_id`
pub const UNKNOWN_ZONE: &str = "unknown";

/// Zone id that marks a practice entry as free throws
pub const FREE_THROW_ZONE: &str = "free_throw";

/// Environment variable overriding the data directory lookup
pub const DATA_DIR_ENV: &str = "HOOPSTATS_DATA_DIR";

/// Environment variable holding the tracing filter for the binary
pub const LOG_ENV: &str = "HOOPSTATS_LOG";

/// Sub-directories of a data root holding JSONL logs
pub const GAMES_DIR: &str = "games";
pub const PRACTICE_DIR: &str = "practice";

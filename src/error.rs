use thiserror::Error;

#[derive(Error, Debug)]
pub enum HoopError {
    // Input errors
    #[error("Failed to parse goal request from stdin")]
    StdinJsonParse(#[from] serde_json::Error),

    // Environment-related errors
    #[error("hoopstats data directory not found (set HOOPSTATS_DATA_DIR)")]
    DataDirNotFound,

    // Async and parallel processing
    #[error("Task failed")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Failed to configure thread pool")]
    ThreadPoolInit(#[from] rayon::ThreadPoolBuildError),

    #[error("Event id set lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, HoopError>;

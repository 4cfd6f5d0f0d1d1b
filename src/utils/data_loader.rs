use crate::constants::{GAMES_DIR, PRACTICE_DIR};
use crate::error::{HoopError, Result};
use crate::goal::EventStore;
use crate::types::{
    EventId, GameEvent, PracticeEntry, SessionId, SessionSnapshot, Timestamp, Timestamped,
};
use rayon::prelude::*;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::task;
use tracing::{debug, trace, warn};

// Capacity constants for performance optimization
const INITIAL_ID_CAPACITY: usize = 1024;
const ALL_RECORDS_CAPACITY: usize = 1024;

/// A record type stored one-per-line in a JSONL log
trait LogRecord: DeserializeOwned + Timestamped + Send {
    fn set_session(&mut self, session_id: SessionId);
}

impl LogRecord for GameEvent {
    fn set_session(&mut self, session_id: SessionId) {
        self.session_id = session_id;
    }
}

impl LogRecord for PracticeEntry {
    fn set_session(&mut self, session_id: SessionId) {
        self.session_id = session_id;
    }
}

/// Collect JSONL files in `dir` and its immediate sub-directories
fn collect_jsonl_files(dir: &Path) -> Vec<(PathBuf, String)> {
    if !dir.exists() {
        return Vec::new();
    }

    let entries: Vec<_> = fs::read_dir(dir)
        .map(|entries| entries.filter_map(|entry| entry.ok()).collect())
        .unwrap_or_else(|source| {
            warn!(path = %dir.display(), %source, "cannot read log directory");
            Vec::new()
        });

    entries
        .par_iter()
        .flat_map(|entry| {
            let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
            if is_dir {
                fs::read_dir(entry.path())
                    .ok()
                    .map(|nested| {
                        nested
                            .filter_map(|file_entry| file_entry.ok())
                            .filter_map(|file_entry| jsonl_session(&file_entry.path()))
                            .collect::<Vec<_>>()
                    })
                    .unwrap_or_default()
            } else {
                jsonl_session(&entry.path()).into_iter().collect()
            }
        })
        .collect()
}

/// `(path, session id)` when `path` is a `.jsonl` file
fn jsonl_session(path: &Path) -> Option<(PathBuf, String)> {
    let file_name = path.file_name()?.to_string_lossy();
    let session_id = file_name.strip_suffix(".jsonl")?.to_string();
    Some((path.to_path_buf(), session_id))
}

/// Parse one JSONL file; blank and malformed lines are skipped
fn process_jsonl_file<T: LogRecord>(path: &Path, session_file_id: &str) -> Vec<T> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let records: Vec<T> = contents
                .par_lines()
                .filter(|line| !line.trim().is_empty())
                .filter_map(|line| {
                    let mut record: T = serde_json::from_str(line).ok()?;
                    record.set_session(SessionId::from(session_file_id));
                    Some(record)
                })
                .collect();
            trace!(path = %path.display(), records = records.len(), "parsed log file");
            records
        }
        Err(source) => {
            warn!(path = %path.display(), %source, "skipping unreadable log file");
            Vec::new()
        }
    }
}

fn load_records<T: LogRecord>(dir: &Path) -> Vec<Vec<T>> {
    collect_jsonl_files(dir)
        .par_iter()
        .map(|(path, session_file_id)| process_jsonl_file(path, session_file_id))
        .collect()
}

/// Drop game events whose id was already seen in any file
fn deduplicate_events(
    results: Vec<Vec<GameEvent>>,
    global_ids: &Mutex<HashSet<EventId>>,
) -> Result<Vec<GameEvent>> {
    let mut all_events = Vec::with_capacity(ALL_RECORDS_CAPACITY);
    let mut duplicates = 0usize;

    for events in results {
        // Minimize lock holding time by batching operations
        let mut ids = global_ids.lock().map_err(|_| HoopError::LockPoisoned)?;

        for event in events {
            // Events without an id are always kept
            if let Some(id) = &event.id
                && !ids.insert(id.clone())
            {
                duplicates += 1;
                continue;
            }
            all_events.push(event);
        }
    }

    if duplicates > 0 {
        debug!(duplicates, "dropped duplicate game events");
    }
    Ok(all_events)
}

/// Load every log under one data root (blocking)
fn load_root(base_path: &Path, global_ids: &Mutex<HashSet<EventId>>) -> Result<SessionSnapshot> {
    let game_events = deduplicate_events(load_records(&base_path.join(GAMES_DIR)), global_ids)?;
    let practice_entries = load_records::<PracticeEntry>(&base_path.join(PRACTICE_DIR))
        .into_iter()
        .flatten()
        .collect();

    Ok(SessionSnapshot {
        game_events,
        practice_entries,
    })
}

/// Stable sort by parsed timestamp, undated records first
fn sort_by_timestamp<T: Timestamped>(records: &mut [T]) {
    records.sort_by_cached_key(|record| record.timestamp().and_then(Timestamp::to_instant));
}

fn merge(snapshots: Vec<SessionSnapshot>) -> SessionSnapshot {
    let mut merged = SessionSnapshot::default();
    for snapshot in snapshots {
        merged.game_events.extend(snapshot.game_events);
        merged.practice_entries.extend(snapshot.practice_entries);
    }

    sort_by_timestamp(&mut merged.game_events);
    sort_by_timestamp(&mut merged.practice_entries);
    merged
}

/// Load all data roots in parallel
pub async fn load_all_data(data_paths: &[PathBuf]) -> Result<SessionSnapshot> {
    // Shared state for deduplication across roots
    let global_ids: Arc<Mutex<HashSet<EventId>>> =
        Arc::new(Mutex::new(HashSet::with_capacity(INITIAL_ID_CAPACITY)));

    let tasks: Vec<_> = data_paths
        .iter()
        .map(|base_path| {
            let base_path = base_path.clone();
            let global_ids = Arc::clone(&global_ids);
            task::spawn_blocking(move || load_root(&base_path, &global_ids))
        })
        .collect();

    let mut snapshots = Vec::with_capacity(tasks.len());
    for task in tasks {
        snapshots.push(task.await??);
    }

    let merged = merge(snapshots);
    debug!(
        roots = data_paths.len(),
        game_events = merged.game_events.len(),
        practice_entries = merged.practice_entries.len(),
        "loaded session logs"
    );
    Ok(merged)
}

/// Synchronous store over JSONL data roots
#[derive(Debug, Clone)]
pub struct JsonlStore {
    roots: Vec<PathBuf>,
}

impl JsonlStore {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl EventStore for JsonlStore {
    fn game_events(&self) -> Result<Vec<GameEvent>> {
        let global_ids = Mutex::new(HashSet::with_capacity(INITIAL_ID_CAPACITY));
        let mut events = Vec::with_capacity(ALL_RECORDS_CAPACITY);
        for root in &self.roots {
            events.extend(deduplicate_events(
                load_records(&root.join(GAMES_DIR)),
                &global_ids,
            )?);
        }
        sort_by_timestamp(&mut events);
        Ok(events)
    }

    fn practice_entries(&self) -> Result<Vec<PracticeEntry>> {
        let mut entries: Vec<PracticeEntry> = self
            .roots
            .iter()
            .flat_map(|root| load_records::<PracticeEntry>(&root.join(PRACTICE_DIR)))
            .flatten()
            .collect();
        sort_by_timestamp(&mut entries);
        Ok(entries)
    }
}

use crate::constants::DATA_DIR_ENV;
use std::env;
use std::path::PathBuf;

// Get hoopstats data roots, explicit override first
pub fn get_data_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(dir) = env::var(DATA_DIR_ENV)
        && !dir.is_empty()
    {
        paths.push(PathBuf::from(dir));
    }

    if let Some(home_path) = home::home_dir() {
        // Primary path
        paths.push(home_path.join(".hoopstats"));

        // Linux paths
        paths.push(home_path.join(".local/share/hoopstats"));

        // macOS paths
        paths.push(home_path.join("Library/Application Support/hoopstats"));
    }

    // Windows paths
    if let Ok(appdata) = env::var("APPDATA") {
        paths.push(PathBuf::from(appdata).join("hoopstats"));
    }

    let mut seen = Vec::with_capacity(paths.len());
    for path in paths {
        if path.exists() && !seen.contains(&path) {
            seen.push(path);
        }
    }
    seen
}

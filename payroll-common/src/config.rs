//! Configuration loading and database path resolution

use std::path::{Path, PathBuf};

/// Database path resolution following priority order:
/// 1. Command-line argument (highest priority)
/// 2. PAYROLL_DATABASE environment variable
/// 3. TOML config file (`database_path` key)
/// 4. Compiled default (`payroll.db` in the working directory)
pub fn resolve_database_path(cli_arg: Option<&Path>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var("PAYROLL_DATABASE") {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(config_path) = config_file_path() {
        if let Ok(contents) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&contents) {
                if let Some(path) = config.get("database_path").and_then(|v| v.as_str()) {
                    return PathBuf::from(path);
                }
            }
        }
    }

    // Priority 4: Compiled default
    PathBuf::from("payroll.db")
}

/// Platform config file location: `<config dir>/payroll-analytics/config.toml`
fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("payroll-analytics").join("config.toml"))
}

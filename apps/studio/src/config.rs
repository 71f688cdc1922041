//! Runtime configuration read from the environment.

use std::path::PathBuf;

const APP_DIR: &str = "listening-studio";
const DB_FILENAME: &str = "listening.db";

/// Studio configuration.
///
/// Environment variables (a `.env` file is honoured):
/// - `LISTENING_DB_PATH`: SQLite file holding the local store
/// - `LISTENING_EXPORT_DIR`: directory receiving exports and result sheets
/// - `RUST_LOG`: tracing filter, `info` by default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioConfig {
    pub db_path: PathBuf,
    pub export_dir: PathBuf,
    pub log_filter: String,
}

impl StudioConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            db_path: non_empty("LISTENING_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(default_db_path),
            export_dir: non_empty("LISTENING_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_export_dir),
            log_filter: non_empty("RUST_LOG").unwrap_or_else(|| "info".into()),
        }
    }
}

fn default_db_path() -> PathBuf {
    // Use app data directory for production, fallback to current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(DB_FILENAME)
}

fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

//! Commands exposed to the host UI.

pub mod exercise;
pub mod study;
pub mod transfer;

pub use exercise::{
    clear_all, create_exercise, delete_exercise, list_exercises, CreateOutcome, DraftError,
    ExerciseForm,
};
pub use study::{dispatch_card_event, download_results, grade_submission};
pub use transfer::{export_all, export_exercise, import_file, import_json, ImportResult};

use crate::collection::ExerciseCollection;
use crate::state::AppState;
use crate::storage::SqliteStore;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::MutexGuard;

#[derive(Debug, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct CommandError {
    pub message: String,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CommandError {}

impl From<crate::storage::StorageError> for CommandError {
    fn from(e: crate::storage::StorageError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<listening_core::ValidationError> for CommandError {
    fn from(e: listening_core::ValidationError) -> Self {
        Self {
            message: format!("Import failed: {}", e),
        }
    }
}

impl From<DraftError> for CommandError {
    fn from(e: DraftError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(e: std::io::Error) -> Self {
        Self { message: e.to_string() }
    }
}

/// Asks the user to confirm an action.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Destination for user-initiated downloads.
pub trait FileSink {
    /// Write `contents` under `file_name`, returning where it went.
    fn write(&mut self, file_name: &str, contents: &str) -> std::io::Result<PathBuf>;
}

/// Writes downloads into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl FileSink for DirectorySink {
    fn write(&mut self, file_name: &str, contents: &str) -> std::io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        fs::write(&path, contents)?;
        tracing::info!("Wrote {}", path.display());
        Ok(path)
    }
}

type CollectionGuard<'a> = MutexGuard<'a, ExerciseCollection<SqliteStore>>;

fn lock(state: &AppState) -> Result<CollectionGuard<'_>, CommandError> {
    state
        .collection
        .lock()
        .map_err(|_| CommandError::new("collection lock poisoned"))
}

//! Common test utilities and fixtures for integration tests.

#![allow(dead_code)]

use listening_studio::commands::{ExerciseForm, FileSink};
use listening_studio::config::StudioConfig;
use listening_studio::state::AppState;
use listening_studio::storage::SqliteStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test context owning an on-disk store in a temporary directory.
pub struct TestContext {
    pub state: AppState,
    pub dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let state = Self::open_state(&dir);
        Self { state, dir }
    }

    /// Re-open the same database, as a new session would.
    pub fn reopen(self) -> Self {
        let TestContext { state, dir } = self;
        drop(state);
        let state = Self::open_state(&dir);
        Self { state, dir }
    }

    pub fn config(dir: &TempDir) -> StudioConfig {
        StudioConfig {
            db_path: dir.path().join("data").join("listening.db"),
            export_dir: dir.path().join("exports"),
            log_filter: "debug".into(),
        }
    }

    fn open_state(dir: &TempDir) -> AppState {
        listening_studio::open(Self::config(dir)).expect("open state")
    }

    pub fn export_dir(&self) -> PathBuf {
        self.dir.path().join("exports")
    }
}

/// Form for a two-blank exercise with matching answers.
pub fn capitals_form() -> ExerciseForm {
    ExerciseForm {
        title: "World capitals".into(),
        transcript: "The capital of France is {{blank}} and the answer is {{ BLANK }}.".into(),
        answers: "Paris, 42".into(),
        ..Default::default()
    }
}

/// Always says yes.
pub fn yes(_: &str) -> bool {
    true
}

/// Always says no.
pub fn no(_: &str) -> bool {
    false
}

/// Sink keeping downloads in memory.
#[derive(Default)]
pub struct MemorySink {
    pub files: Vec<(String, String)>,
}

impl FileSink for MemorySink {
    fn write(&mut self, file_name: &str, contents: &str) -> std::io::Result<PathBuf> {
        self.files.push((file_name.to_string(), contents.to_string()));
        Ok(PathBuf::from(file_name))
    }
}

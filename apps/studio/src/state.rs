//! Application state.

use crate::collection::ExerciseCollection;
use crate::commands::DirectorySink;
use crate::config::StudioConfig;
use crate::storage::SqliteStore;
use std::sync::Mutex;

/// State shared with the host UI.
pub struct AppState {
    pub collection: Mutex<ExerciseCollection<SqliteStore>>,
    pub config: StudioConfig,
}

impl AppState {
    pub fn new(store: SqliteStore, config: StudioConfig) -> Self {
        Self {
            collection: Mutex::new(ExerciseCollection::open(store)),
            config,
        }
    }

    /// Sink writing downloads into the configured export directory.
    pub fn export_sink(&self) -> DirectorySink {
        DirectorySink::new(&self.config.export_dir)
    }
}

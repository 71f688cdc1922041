//! Persistence of the exercise collection in a key-value store.

use crate::storage::{KeyValueStore, StorageError};
use listening_core::{Exercise, ExerciseRecord};

/// Versioned key holding the whole collection. A new on-disk shape needs a new key.
pub const STORAGE_KEY: &str = "listening_lessons_v1";

/// Loads and saves the whole collection as one JSON array.
pub struct ExerciseStore<S> {
    backend: S,
}

impl<S: KeyValueStore> ExerciseStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Load every stored exercise, in insertion order.
    ///
    /// Missing or unreadable data yields an empty collection.
    pub fn load_all(&self) -> Vec<Exercise> {
        match self.try_load_all() {
            Ok(exercises) => exercises,
            Err(e) => {
                tracing::warn!("Discarding unreadable stored exercises: {}", e);
                vec![]
            }
        }
    }

    /// Load every stored exercise, reporting read failures.
    pub fn try_load_all(&self) -> Result<Vec<Exercise>, StorageError> {
        let Some(raw) = self.backend.get(STORAGE_KEY)? else {
            return Ok(vec![]);
        };
        let records: Vec<ExerciseRecord> = serde_json::from_str(&raw)?;
        Ok(records.into_iter().map(Exercise::from_record).collect())
    }

    /// Overwrite the stored collection.
    pub fn save_all(&mut self, exercises: &[Exercise]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(exercises)?;
        self.backend.set(STORAGE_KEY, &raw)?;
        tracing::debug!("Saved {} exercises ({} bytes)", exercises.len(), raw.len());
        Ok(())
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }
}

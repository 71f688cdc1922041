//! In-memory exercise collection mirrored to storage.

use crate::audio::AudioRegistry;
use crate::persistence::ExerciseStore;
use crate::storage::{KeyValueStore, StorageError};
use listening_core::{Exercise, ExerciseRecord, ValidationError};

/// Notified after every mutation so the host can re-render.
pub trait CollectionObserver {
    /// `exercises` is in insertion order; display order is the reverse.
    fn on_change(&mut self, exercises: &[Exercise]);
}

/// Owns the collection, its persisted mirror and the session audio.
///
/// Every mutation overwrites the stored collection and notifies observers.
/// Save failures are logged and otherwise ignored; the in-memory collection
/// stays authoritative for the session.
pub struct ExerciseCollection<S> {
    store: ExerciseStore<S>,
    exercises: Vec<Exercise>,
    audio: AudioRegistry,
    observers: Vec<Box<dyn CollectionObserver + Send>>,
}

impl<S: KeyValueStore> ExerciseCollection<S> {
    /// Open the collection, loading whatever the backend holds.
    pub fn open(backend: S) -> Self {
        let store = ExerciseStore::new(backend);
        let exercises = store.load_all();
        tracing::info!("Loaded {} exercises", exercises.len());
        Self {
            store,
            exercises,
            audio: AudioRegistry::new(),
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn CollectionObserver + Send>) {
        self.observers.push(observer);
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn get(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn audio(&self) -> &AudioRegistry {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut AudioRegistry {
        &mut self.audio
    }

    pub fn store(&self) -> &ExerciseStore<S> {
        &self.store
    }

    /// Append an exercise. Returns its id.
    pub fn add(&mut self, exercise: Exercise) -> String {
        let id = exercise.id.clone();
        tracing::info!("Adding exercise {} ({})", id, exercise.title);
        self.exercises.push(exercise);
        self.commit();
        id
    }

    /// Remove the exercise with `id`. Returns false, touching nothing, if absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(pos) = self.exercises.iter().position(|e| e.id == id) else {
            return false;
        };
        let removed = self.exercises.remove(pos);
        self.release_audio(&removed);
        tracing::info!("Removed exercise {}", id);
        self.commit();
        true
    }

    /// Remove every exercise. Callers gate this behind a confirmation.
    pub fn clear(&mut self) {
        let removed = std::mem::take(&mut self.exercises);
        for exercise in &removed {
            self.release_audio(exercise);
        }
        tracing::info!("Cleared {} exercises", removed.len());
        self.commit();
    }

    /// Import a JSON array of exercise records.
    pub fn import_json(&mut self, raw: &str) -> Result<usize, ValidationError> {
        let records: Vec<ExerciseRecord> =
            serde_json::from_str(raw).map_err(|e| ValidationError::Malformed(e.to_string()))?;
        self.import(records)
    }

    /// Import records atomically: nothing is added unless every record is valid.
    ///
    /// Imported ids are discarded and replaced with fresh ones.
    pub fn import(&mut self, records: Vec<ExerciseRecord>) -> Result<usize, ValidationError> {
        validate_records(&records)?;

        let count = records.len();
        self.exercises
            .extend(records.into_iter().map(Exercise::from_import));
        tracing::info!("Imported {} exercises", count);
        self.commit();
        Ok(count)
    }

    /// Canonical snapshot of one exercise.
    pub fn export_one(&self, id: &str) -> Option<Exercise> {
        self.get(id).cloned()
    }

    /// Canonical snapshot of the whole collection, in insertion order.
    pub fn export_all(&self) -> Vec<Exercise> {
        self.exercises.clone()
    }

    /// Pretty-printed JSON for one exercise.
    pub fn export_one_json(&self, id: &str) -> Result<Option<String>, StorageError> {
        self.get(id)
            .map(serde_json::to_string_pretty)
            .transpose()
            .map_err(Into::into)
    }

    /// Pretty-printed JSON array of the whole collection.
    pub fn export_all_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string_pretty(&self.exercises)?)
    }

    /// Revoke the exercise's session blob unless a remaining exercise still plays it.
    fn release_audio(&mut self, exercise: &Exercise) {
        if !exercise.has_session_audio() {
            return;
        }
        if self.exercises.iter().any(|e| e.audio_url == exercise.audio_url) {
            return;
        }
        self.audio.revoke_object_url(&exercise.audio_url);
    }

    fn commit(&mut self) {
        if let Err(e) = self.store.save_all(&self.exercises) {
            tracing::error!("Failed to save exercises: {}", e);
        }
        for observer in &mut self.observers {
            observer.on_change(&self.exercises);
        }
    }
}

fn validate_records(records: &[ExerciseRecord]) -> Result<(), ValidationError> {
    for (index, record) in records.iter().enumerate() {
        if !record.has_title() {
            return Err(ValidationError::MissingTitle { index });
        }
        if !record.has_transcript() {
            return Err(ValidationError::MissingTranscript { index });
        }
    }
    Ok(())
}

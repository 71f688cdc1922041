//! Core types for listening exercises.

use crate::parser;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title used when an exercise is saved without one.
pub const DEFAULT_TITLE: &str = "Untitled";

/// A listening exercise with its canonical (persisted) fields.
///
/// Field order is the serialized order, which keeps repeated saves
/// byte-identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub title: String,
    /// External URL or a session-scoped `blob:` reference.
    #[serde(rename = "audioURL")]
    pub audio_url: String,
    /// Transcript with blanks already replaced by indexed placeholders.
    #[serde(rename = "transcriptHTML")]
    pub transcript_html: String,
    /// `answers[i]` answers the i-th blank in document order.
    pub answers: Vec<String>,
    /// ISO 8601 creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Input for creating a new exercise.
#[derive(Debug, Clone, Default)]
pub struct NewExercise {
    pub title: String,
    pub audio_url: String,
    pub transcript_html: String,
    pub answers: Vec<String>,
    pub created_at: Option<String>,
}

/// Lenient exercise shape used for stored data and import files.
///
/// Every field is optional; missing values get the same defaults a new
/// exercise would.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "audioURL")]
    pub audio_url: Option<String>,
    #[serde(default, rename = "transcriptHTML", alias = "transcriptMarkup")]
    pub transcript_html: Option<String>,
    #[serde(default)]
    pub answers: Option<Vec<String>>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

impl Exercise {
    /// Create an exercise with a fresh id and creation time.
    pub fn new(input: NewExercise) -> Self {
        Self {
            id: new_exercise_id(),
            title: title_or_default(Some(input.title)),
            audio_url: input.audio_url,
            transcript_html: input.transcript_html,
            answers: input.answers,
            created_at: input.created_at.filter(|c| !c.is_empty()).unwrap_or_else(now_iso),
        }
    }

    /// Build an exercise from a stored record, keeping its id when present.
    pub fn from_record(record: ExerciseRecord) -> Self {
        Self {
            id: record
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(new_exercise_id),
            title: title_or_default(record.title),
            audio_url: record.audio_url.unwrap_or_default(),
            transcript_html: record.transcript_html.unwrap_or_default(),
            answers: record.answers.unwrap_or_default(),
            created_at: record
                .created_at
                .filter(|c| !c.is_empty())
                .unwrap_or_else(now_iso),
        }
    }

    /// Build an exercise from an imported record. Imported ids are never trusted.
    pub fn from_import(record: ExerciseRecord) -> Self {
        Self::from_record(ExerciseRecord { id: None, ..record })
    }

    /// Number of blank slots in the transcript.
    pub fn blank_count(&self) -> usize {
        parser::materialize(&self.transcript_html)
            .iter()
            .filter(|s| matches!(s, parser::Segment::Blank(_)))
            .count()
    }

    /// Whether the answer count differs from the blank count.
    pub fn answers_mismatch(&self) -> bool {
        self.blank_count() != self.answers.len()
    }

    /// Whether the audio points at a session-scoped blob.
    pub fn has_session_audio(&self) -> bool {
        self.audio_url.starts_with("blob:")
    }
}

impl ExerciseRecord {
    /// Whether the record carries a non-empty title.
    pub fn has_title(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    /// Whether the record carries non-empty transcript markup.
    pub fn has_transcript(&self) -> bool {
        self.transcript_html.as_deref().is_some_and(|t| !t.is_empty())
    }
}

impl From<&Exercise> for ExerciseRecord {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: Some(exercise.id.clone()),
            title: Some(exercise.title.clone()),
            audio_url: Some(exercise.audio_url.clone()),
            transcript_html: Some(exercise.transcript_html.clone()),
            answers: Some(exercise.answers.clone()),
            created_at: Some(exercise.created_at.clone()),
        }
    }
}

/// Generate a new opaque exercise id.
pub fn new_exercise_id() -> String {
    format!("l_{}", Uuid::new_v4().simple())
}

fn title_or_default(title: Option<String>) -> String {
    match title {
        Some(t) if !t.is_empty() => t,
        _ => DEFAULT_TITLE.to_string(),
    }
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Exercise {
        Exercise {
            id: "l_1".into(),
            title: "Capitals".into(),
            audio_url: "https://example.com/a.mp3".into(),
            transcript_html: parser::parse("{{blank}} is in {{blank}}"),
            answers: vec!["Paris".into(), "France".into()],
            created_at: "2024-01-01T00:00:00.000Z".into(),
        }
    }

    #[test]
    fn serializes_canonical_field_names_in_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let id = json.find("\"id\"").unwrap();
        let title = json.find("\"title\"").unwrap();
        let audio = json.find("\"audioURL\"").unwrap();
        let transcript = json.find("\"transcriptHTML\"").unwrap();
        let answers = json.find("\"answers\"").unwrap();
        let created = json.find("\"createdAt\"").unwrap();
        assert!(id < title && title < audio && audio < transcript);
        assert!(transcript < answers && answers < created);
    }

    #[test]
    fn new_exercise_gets_id_timestamp_and_default_title() {
        let exercise = Exercise::new(NewExercise::default());
        assert!(exercise.id.starts_with("l_"));
        assert_eq!(exercise.title, DEFAULT_TITLE);
        assert!(exercise.created_at.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&exercise.created_at).is_ok());
    }

    #[test]
    fn ids_are_unique() {
        let a = Exercise::new(NewExercise::default());
        let b = Exercise::new(NewExercise::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn record_defaults_fill_missing_fields() {
        let record: ExerciseRecord =
            serde_json::from_str(r#"{"title":"","transcriptMarkup":"x"}"#).unwrap();
        let exercise = Exercise::from_record(record);
        assert_eq!(exercise.title, DEFAULT_TITLE);
        assert_eq!(exercise.transcript_html, "x");
        assert_eq!(exercise.audio_url, "");
        assert!(exercise.answers.is_empty());
        assert!(!exercise.id.is_empty());
    }

    #[test]
    fn from_record_keeps_stored_id() {
        let exercise = Exercise::from_record(ExerciseRecord::from(&sample()));
        assert_eq!(exercise, sample());
    }

    #[test]
    fn from_import_replaces_id() {
        let exercise = Exercise::from_import(ExerciseRecord::from(&sample()));
        assert_ne!(exercise.id, "l_1");
        assert_eq!(exercise.title, "Capitals");
    }

    #[test]
    fn blank_count_and_mismatch() {
        let mut exercise = sample();
        assert_eq!(exercise.blank_count(), 2);
        assert!(!exercise.answers_mismatch());
        exercise.answers.pop();
        assert!(exercise.answers_mismatch());
    }

    #[test]
    fn detects_session_audio() {
        let mut exercise = sample();
        assert!(!exercise.has_session_audio());
        exercise.audio_url = "blob:session/abc".into();
        assert!(exercise.has_session_audio());
    }
}

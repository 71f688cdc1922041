//! Exercise authoring and management commands.

use super::{lock, CommandError, Confirm};
use crate::audio::AudioInput;
use crate::state::AppState;
use listening_core::{
    count_blanks, parse, render_list, split_answers, Exercise, ListView, NewExercise,
};
use thiserror::Error;

/// Values from the authoring form.
#[derive(Debug, Clone, Default)]
pub struct ExerciseForm {
    pub title: String,
    /// Raw transcript containing `{{blank}}` markers.
    pub transcript: String,
    /// Comma separated answers, in blank order.
    pub answers: String,
    pub audio: AudioInput,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Please fill in at least the title and transcript.")]
    MissingFields,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(Exercise),
    /// The user declined to save despite a blank/answer count mismatch.
    Cancelled,
}

/// Create an exercise from the authoring form.
///
/// A differing number of blanks and answers is allowed, but only after the
/// user confirms it.
pub fn create_exercise(
    state: &AppState,
    form: ExerciseForm,
    confirm: &mut dyn Confirm,
) -> Result<CreateOutcome, CommandError> {
    let title = form.title.trim();
    let transcript = form.transcript.trim();
    if title.is_empty() || transcript.is_empty() {
        return Err(DraftError::MissingFields.into());
    }

    let answers = split_answers(&form.answers);
    let blanks = count_blanks(transcript);
    if blanks != answers.len() {
        let prompt = format!(
            "You marked {} blanks but entered {} answers.\nSave anyway?",
            blanks,
            answers.len()
        );
        if !confirm.confirm(&prompt) {
            return Ok(CreateOutcome::Cancelled);
        }
        tracing::warn!(
            blanks,
            answers = answers.len(),
            "Saving exercise with mismatched answers"
        );
    }

    let mut collection = lock(state)?;
    let audio_url = collection.audio_mut().attach(form.audio);
    let exercise = Exercise::new(NewExercise {
        title: title.to_string(),
        audio_url,
        transcript_html: parse(transcript),
        answers,
        created_at: None,
    });
    collection.add(exercise.clone());

    Ok(CreateOutcome::Created(exercise))
}

/// Render the collection, newest first.
pub fn list_exercises(state: &AppState) -> Result<ListView, CommandError> {
    let collection = lock(state)?;
    Ok(render_list(collection.exercises()))
}

/// Delete one exercise after confirmation. Returns whether anything was removed.
pub fn delete_exercise(
    state: &AppState,
    id: &str,
    confirm: &mut dyn Confirm,
) -> Result<bool, CommandError> {
    if !confirm.confirm("Delete this exercise?") {
        return Ok(false);
    }
    let mut collection = lock(state)?;
    Ok(collection.remove(id))
}

/// Delete every exercise after confirmation. Returns whether the collection was cleared.
pub fn clear_all(state: &AppState, confirm: &mut dyn Confirm) -> Result<bool, CommandError> {
    if !confirm.confirm("Delete all exercises from local storage?") {
        return Ok(false);
    }
    let mut collection = lock(state)?;
    collection.clear();
    Ok(true)
}

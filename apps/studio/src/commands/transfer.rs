//! Import and export commands.

use super::{lock, CommandError, FileSink};
use crate::state::AppState;
use listening_core::export_file_name;
use std::fs;
use std::path::Path;

/// File name used when exporting the whole collection.
pub const EXPORT_ALL_FILE_NAME: &str = "listening_lessons_export.json";

#[derive(Debug, serde::Serialize, PartialEq, Eq)]
pub struct ImportResult {
    pub imported: usize,
}

/// Import exercises from a JSON file.
pub fn import_file<P: AsRef<Path>>(
    state: &AppState,
    path: P,
) -> Result<ImportResult, CommandError> {
    let content = fs::read_to_string(path.as_ref())?;
    tracing::info!("Importing exercises from {}", path.as_ref().display());
    import_json(state, &content)
}

/// Import exercises from JSON text.
pub fn import_json(state: &AppState, content: &str) -> Result<ImportResult, CommandError> {
    let mut collection = lock(state)?;
    let imported = collection.import_json(content)?;
    Ok(ImportResult { imported })
}

/// Export the whole collection. Returns the file name written.
pub fn export_all(state: &AppState, sink: &mut dyn FileSink) -> Result<String, CommandError> {
    let payload = lock(state)?.export_all_json()?;
    sink.write(EXPORT_ALL_FILE_NAME, &payload)?;
    Ok(EXPORT_ALL_FILE_NAME.to_string())
}

/// Export one exercise. Returns the file name written.
pub fn export_exercise(
    state: &AppState,
    id: &str,
    sink: &mut dyn FileSink,
) -> Result<String, CommandError> {
    let collection = lock(state)?;
    let not_found = || CommandError::new(format!("exercise not found: {}", id));
    let title = collection.get(id).ok_or_else(not_found)?.title.clone();
    let payload = collection.export_one_json(id)?.ok_or_else(not_found)?;
    drop(collection);

    let file_name = export_file_name(&title);
    sink.write(&file_name, &payload)?;
    Ok(file_name)
}

//! Commands for taking exercises.

use super::{lock, transfer, CommandError, Confirm, FileSink};
use crate::state::AppState;
use listening_core::{CardEvent, CardHandlers, CardOutcome, CardView, GradeReport};

/// Grade values typed into the blanks of one exercise.
pub fn grade_submission(
    state: &AppState,
    id: &str,
    values: Vec<String>,
) -> Result<GradeReport, CommandError> {
    let mut card = card_for(state, id)?;
    let mut handlers = Inert;
    match card.dispatch(CardEvent::Submit(values), &mut handlers) {
        CardOutcome::Graded(report) => Ok(report),
        other => Err(CommandError::new(format!("unexpected outcome: {:?}", other))),
    }
}

/// Write the per-blank result sheet for one exercise. Returns the file name.
pub fn download_results(
    state: &AppState,
    id: &str,
    values: Vec<String>,
    sink: &mut dyn FileSink,
) -> Result<String, CommandError> {
    let mut card = card_for(state, id)?;
    let mut confirm = |_: &str| false;
    let event = CardEvent::DownloadResults(values);
    match dispatch_card_event(state, &mut card, event, sink, &mut confirm)? {
        CardOutcome::Downloaded { file_name } => Ok(file_name),
        other => Err(CommandError::new(format!("unexpected outcome: {:?}", other))),
    }
}

/// Forward a card event, carrying out its side effects against the collection.
///
/// The collection is not locked while the card runs, so handlers can take the
/// lock themselves.
pub fn dispatch_card_event(
    state: &AppState,
    card: &mut CardView,
    event: CardEvent,
    sink: &mut dyn FileSink,
    confirm: &mut dyn Confirm,
) -> Result<CardOutcome, CommandError> {
    let mut handlers = StudioHandlers {
        state,
        sink,
        confirm,
        error: None,
    };
    let outcome = card.dispatch(event, &mut handlers);
    match handlers.error {
        Some(e) => Err(e),
        None => Ok(outcome),
    }
}

fn card_for(state: &AppState, id: &str) -> Result<CardView, CommandError> {
    let collection = lock(state)?;
    collection
        .get(id)
        .map(CardView::new)
        .ok_or_else(|| CommandError::new(format!("exercise not found: {}", id)))
}

struct StudioHandlers<'a> {
    state: &'a AppState,
    sink: &'a mut dyn FileSink,
    confirm: &'a mut dyn Confirm,
    error: Option<CommandError>,
}

impl StudioHandlers<'_> {
    fn record(&mut self, result: Result<(), CommandError>) {
        if let Err(e) = result {
            tracing::error!("Card action failed: {}", e);
            self.error.get_or_insert(e);
        }
    }
}

impl CardHandlers for StudioHandlers<'_> {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.confirm.confirm(prompt)
    }

    fn delete(&mut self, id: &str) {
        let result = lock(self.state).map(|mut collection| {
            collection.remove(id);
        });
        self.record(result);
    }

    fn export(&mut self, id: &str) {
        let result = transfer::export_exercise(self.state, id, &mut *self.sink).map(|_| ());
        self.record(result);
    }

    fn download(&mut self, file_name: &str, contents: &str) {
        let result = self
            .sink
            .write(file_name, contents)
            .map(|_| ())
            .map_err(CommandError::from);
        self.record(result);
    }
}

/// Handlers for read-only card actions.
struct Inert;

impl CardHandlers for Inert {
    fn confirm(&mut self, _prompt: &str) -> bool {
        false
    }
    fn delete(&mut self, _id: &str) {}
    fn export(&mut self, _id: &str) {}
    fn download(&mut self, _file_name: &str, _contents: &str) {}
}

//! Card view model for rendering exercises.
//!
//! The exercise itself carries no behavior. A host renders each exercise as a
//! [`CardView`] and forwards user actions through [`CardView::dispatch`]; side
//! effects (deleting, exporting, writing files, asking the user) go through a
//! [`CardHandlers`] implementation supplied by the host.

use crate::grading::{self, GradeReport};
use crate::parser::{self, escape_html, Segment};
use crate::types::Exercise;

/// Message shown when the collection is empty.
pub const EMPTY_LIST_MESSAGE: &str = "No exercises yet. Add one using the form on the left.";

/// Host-side capabilities a card needs.
pub trait CardHandlers {
    /// Ask the user to confirm a destructive action.
    fn confirm(&mut self, prompt: &str) -> bool;
    /// Remove the exercise from the collection.
    fn delete(&mut self, id: &str);
    /// Export the exercise to a file.
    fn export(&mut self, id: &str);
    /// Offer a text file for download.
    fn download(&mut self, file_name: &str, contents: &str);
}

/// User actions on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardEvent {
    /// Submit the values typed into the blank slots, in slot order.
    Submit(Vec<String>),
    ToggleAnswers,
    DownloadResults(Vec<String>),
    Delete,
    Export,
}

/// What a dispatched event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardOutcome {
    Graded(GradeReport),
    AnswersShown(String),
    AnswersHidden,
    Downloaded { file_name: String },
    Deleted,
    DeleteCancelled,
    Exported,
}

/// Renderable state of one exercise card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub audio_url: String,
    pub segments: Vec<Segment>,
    pub answers: Vec<String>,
    pub answers_visible: bool,
    pub last_report: Option<GradeReport>,
}

/// Rendered collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Empty { message: &'static str },
    Cards(Vec<CardView>),
}

impl CardView {
    pub fn new(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id.clone(),
            title: exercise.title.clone(),
            audio_url: exercise.audio_url.clone(),
            segments: parser::materialize(&exercise.transcript_html),
            answers: exercise.answers.clone(),
            answers_visible: false,
            last_report: None,
        }
    }

    /// Slot indices in document order.
    pub fn slots(&self) -> Vec<usize> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Blank(i) => Some(*i),
                Segment::Text(_) => None,
            })
            .collect()
    }

    /// Escaped, comma separated answer list.
    pub fn answers_markup(&self) -> String {
        self.answers
            .iter()
            .map(|a| escape_html(a))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Handle a user action.
    pub fn dispatch(&mut self, event: CardEvent, handlers: &mut dyn CardHandlers) -> CardOutcome {
        match event {
            CardEvent::Submit(values) => {
                let report =
                    grading::grade_slots(&self.slots(), values.as_slice(), self.answers.as_slice());
                self.last_report = Some(report.clone());
                CardOutcome::Graded(report)
            }
            CardEvent::ToggleAnswers => {
                self.answers_visible = !self.answers_visible;
                if self.answers_visible {
                    CardOutcome::AnswersShown(self.answers_markup())
                } else {
                    CardOutcome::AnswersHidden
                }
            }
            CardEvent::DownloadResults(values) => {
                let file_name = result_file_name(&self.title);
                let text = grading::result_text_slots(
                    &self.slots(),
                    values.as_slice(),
                    self.answers.as_slice(),
                );
                handlers.download(&file_name, &text);
                CardOutcome::Downloaded { file_name }
            }
            CardEvent::Delete => {
                if handlers.confirm("Delete this exercise?") {
                    handlers.delete(&self.id);
                    CardOutcome::Deleted
                } else {
                    CardOutcome::DeleteCancelled
                }
            }
            CardEvent::Export => {
                handlers.export(&self.id);
                CardOutcome::Exported
            }
        }
    }
}

/// Render the collection newest-first.
pub fn render_list(exercises: &[Exercise]) -> ListView {
    if exercises.is_empty() {
        return ListView::Empty {
            message: EMPTY_LIST_MESSAGE,
        };
    }
    ListView::Cards(exercises.iter().rev().map(CardView::new).collect())
}

/// File name for a single exercise export.
pub fn export_file_name(title: &str) -> String {
    format!("{}.json", underscore_whitespace(title))
}

/// File name for a downloaded result sheet.
pub fn result_file_name(title: &str) -> String {
    format!("{}_result.txt", underscore_whitespace(title))
}

fn underscore_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join("_")
}

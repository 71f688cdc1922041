//! Core listening exercise library shared by host applications.
//!
//! Provides:
//! - Transcript parser turning `{{blank}}` markers into indexed placeholders
//! - Answer normalization (case and accent insensitive)
//! - Grading of submitted blanks against stored answers
//! - Shared types (Exercise, ExerciseRecord, etc.)
//! - A card view model that renders an exercise without owning any behavior

pub mod error;
pub mod grading;
pub mod normalize;
pub mod parser;
pub mod types;
pub mod view;

pub use error::ValidationError;
pub use grading::{
    grade, grade_slots, result_text, result_text_slots, BlankOutcome, GradeReport, Verdict,
};
pub use normalize::{answers_match, normalize};
pub use parser::{count_blanks, escape_html, materialize, parse, split_answers, Segment};
pub use types::{Exercise, ExerciseRecord, NewExercise, DEFAULT_TITLE};
pub use view::{
    export_file_name, render_list, result_file_name, CardEvent, CardHandlers, CardOutcome,
    CardView, ListView, EMPTY_LIST_MESSAGE,
};

//! Grading of submitted blank values.

use crate::normalize::answers_match;
use serde::{Deserialize, Serialize};

/// Comparison result for one blank slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlankOutcome {
    pub index: usize,
    pub submitted: String,
    /// Expected answer, empty when the slot has no stored answer.
    pub expected: String,
    pub correct: bool,
}

/// Score for a whole submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeReport {
    pub correct_count: usize,
    /// Number of stored answers.
    pub total: usize,
    /// Rounded percentage, 0 when there are no answers.
    pub percent: u32,
    /// One entry per submitted slot.
    pub outcomes: Vec<BlankOutcome>,
}

/// Overall result bucket, used to style the result banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Perfect,
    Passing,
    Failing,
    NotApplicable,
}

impl GradeReport {
    pub fn verdict(&self) -> Verdict {
        match self.percent {
            _ if self.total == 0 => Verdict::NotApplicable,
            100 => Verdict::Perfect,
            p if p >= 50 => Verdict::Passing,
            _ => Verdict::Failing,
        }
    }

    /// Human readable summary line.
    pub fn summary(&self) -> String {
        format!(
            "You got {} / {} correct ({}%)",
            self.correct_count, self.total, self.percent
        )
    }
}

/// Grade submitted values against the stored answers.
///
/// `submitted[i]` is compared with `answers[i]`; a slot without a stored
/// answer is never correct.
pub fn grade<S: AsRef<str>, A: AsRef<str>>(submitted: &[S], answers: &[A]) -> GradeReport {
    let slots: Vec<usize> = (0..submitted.len()).collect();
    grade_slots(&slots, submitted, answers)
}

/// Grade values typed into slots that name their own answer index.
///
/// `slots` lists the answer index of each input slot in document order and
/// `submitted[p]` is the value of the p-th slot. Each slot yields exactly one
/// outcome, even when indices repeat or leave gaps.
pub fn grade_slots<S: AsRef<str>, A: AsRef<str>>(
    slots: &[usize],
    submitted: &[S],
    answers: &[A],
) -> GradeReport {
    let outcomes: Vec<BlankOutcome> = slots
        .iter()
        .enumerate()
        .map(|(position, &index)| {
            let value = slot_value(submitted, position);
            let expected = expected_answer(answers, index);
            BlankOutcome {
                index,
                submitted: value.to_string(),
                expected: expected.to_string(),
                correct: answers_match(value, expected),
            }
        })
        .collect();

    let correct_count = outcomes.iter().filter(|o| o.correct).count();
    let total = answers.len();

    GradeReport {
        correct_count,
        total,
        percent: percent(correct_count, total),
        outcomes,
    }
}

/// Plain text report with one line per blank.
pub fn result_text<S: AsRef<str>, A: AsRef<str>>(submitted: &[S], answers: &[A]) -> String {
    let slots: Vec<usize> = (0..submitted.len()).collect();
    result_text_slots(&slots, submitted, answers)
}

/// Plain text report with one line per input slot, in document order.
pub fn result_text_slots<S: AsRef<str>, A: AsRef<str>>(
    slots: &[usize],
    submitted: &[S],
    answers: &[A],
) -> String {
    slots
        .iter()
        .enumerate()
        .map(|(position, &index)| {
            format!(
                "Blank {}: {}\t(answer: {})",
                index.saturating_add(1),
                slot_value(submitted, position),
                expected_answer(answers, index)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn slot_value<S: AsRef<str>>(submitted: &[S], position: usize) -> &str {
    submitted.get(position).map(|v| v.as_ref()).unwrap_or("")
}

fn expected_answer<A: AsRef<str>>(answers: &[A], index: usize) -> &str {
    answers.get(index).map(|a| a.as_ref()).unwrap_or("")
}

/// Round half up, matching how scores have always been displayed.
fn percent(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let scaled = (correct.min(total) * 100 * 2 + total) / (2 * total);
    scaled as u32
}

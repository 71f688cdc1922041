//! Transcript parser for listening exercises.
//!
//! # Format
//! ```text
//! The capital of France is {{blank}}, the answer is {{ BLANK }}.
//! ```
//!
//! Markers are case-insensitive and may contain whitespace inside the braces.
//! Parsing escapes the transcript first and then swaps each marker for an
//! indexed placeholder:
//!
//! ```text
//! The capital of France is <span data-blank="0"></span>,
//! the answer is <span data-blank="1"></span>.
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\{\{\s*blank\s*\}\}").expect("valid blank marker pattern"));

static BLANK_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<span data-blank="(\d+)"></span>"#).expect("valid placeholder pattern")
});

/// A piece of materialized transcript markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Markup between blanks, already escaped.
    Text(String),
    /// An input slot answering `answers[index]`.
    Blank(usize),
}

/// Escape the characters that are significant in HTML markup.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Parse raw transcript text into markup with indexed blank placeholders.
pub fn parse(raw: &str) -> String {
    let escaped = escape_html(raw);
    let mut index = 0usize;
    BLANK_MARKER
        .replace_all(&escaped, |_: &regex::Captures| {
            let placeholder = placeholder(index);
            index += 1;
            placeholder
        })
        .into_owned()
}

/// Count blank markers in raw transcript text.
pub fn count_blanks(raw: &str) -> usize {
    BLANK_MARKER.find_iter(raw).count()
}

/// Split a comma separated answer list.
pub fn split_answers(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return vec![];
    }
    raw.split(',').map(|a| a.trim().to_string()).collect()
}

/// Split transcript markup into text and blank slots, in document order.
pub fn materialize(markup: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in BLANK_PLACEHOLDER.captures_iter(markup) {
        let Some(whole) = caps.get(0) else { continue };
        let Ok(index) = caps[1].parse::<usize>() else {
            continue;
        };

        if whole.start() > last {
            segments.push(Segment::Text(markup[last..whole.start()].to_string()));
        }
        segments.push(Segment::Blank(index));
        last = whole.end();
    }

    if last < markup.len() {
        segments.push(Segment::Text(markup[last..].to_string()));
    }

    segments
}

fn placeholder(index: usize) -> String {
    format!(r#"<span data-blank="{}"></span>"#, index)
}

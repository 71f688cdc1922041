//! Error types for listening-core.

use thiserror::Error;

/// Errors raised while validating exercise records before they enter a collection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("record {index}: missing title")]
    MissingTitle { index: usize },

    #[error("record {index}: missing transcript")]
    MissingTranscript { index: usize },

    #[error("invalid import file: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::MissingTitle { index: 1 }.to_string(),
            "record 1: missing title"
        );
        assert_eq!(
            ValidationError::Malformed("bad".into()).to_string(),
            "invalid import file: bad"
        );
    }
}

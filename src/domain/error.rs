// ============================================================
// Layer 3 — Pipeline Errors
// ============================================================
// Three kinds of failure, none of them retried:
//
//   Input              → a malformed source record, or a tokenizer /
//                        normaliser failure. Aborts the current load.
//   Precondition       → a superset with duplicate entries was handed
//                        to the vectorizer. Programming error.
//   InvariantViolation → a document references a label that is not in
//                        the computed label set. Organizer bug.
//
// Every variant carries enough context (line, record index, label)
// to find the offending input.

use thiserror::Error;

pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input error at {location}: {message}")]
    Input { location: String, message: String },

    #[error("precondition failed: {0}")]
    Precondition(String),

    #[error("invariant violated: document {index} has label '{label}' which is not in the label set")]
    InvariantViolation { index: usize, label: String },
}

impl PipelineError {
    /// Build an `Input` error for a location such as "line 3" or "record 7 (label 'ana')".
    pub fn input(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Input {
            location: location.into(),
            message:  message.into(),
        }
    }

    /// Re-locate an `Input` error raised by a collaborator that did not know
    /// which record it was working on. The collaborator's own location is
    /// kept as "<record> via <collaborator>". Other variants pass through
    /// unchanged.
    pub fn at(self, location: impl Into<String>) -> Self {
        match self {
            Self::Input { location: via, message } => Self::Input {
                location: format!("{} via {via}", location.into()),
                message,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_message_has_location() {
        let e = PipelineError::input("line 4", "expected 2 fields, found 3");
        assert_eq!(e.to_string(), "input error at line 4: expected 2 fields, found 3");
    }

    #[test]
    fn test_at_relocates_input_only() {
        let e = PipelineError::input("normalizer", "boom").at("record 2 (label 'bob')");
        assert_eq!(
            e.to_string(),
            "input error at record 2 (label 'bob') via normalizer: boom"
        );

        let e = PipelineError::InvariantViolation { index: 1, label: "eve".into() }.at("x");
        assert!(matches!(e, PipelineError::InvariantViolation { index: 1, .. }));
    }
}

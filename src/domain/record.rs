// ============================================================
// Layer 3 — RawRecord Domain Type
// ============================================================
// One line of the corpus: who spoke, and what they said.
// By the time a RawRecord exists the loader has already
// lower-cased both fields, so label comparisons downstream
// are plain string equality.

use serde::{Deserialize, Serialize};

/// A single labelled utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Speaker / class label
    pub label: String,

    /// The raw utterance text, before tokenisation
    pub sentence: String,
}

impl RawRecord {
    /// Uses impl Into<String> so callers can pass &str or String.
    ///
    /// Example:
    ///   let r = RawRecord::new("ana", "hi there");
    pub fn new(label: impl Into<String>, sentence: impl Into<String>) -> Self {
        Self {
            label:    label.into(),
            sentence: sentence.into(),
        }
    }
}

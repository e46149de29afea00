// ============================================================
// Layer 3 — WordSet and Document Domain Types
// ============================================================
// A Document is ONE utterance: the set of distinct normalised
// words it contains plus the label of whoever said it.
//
// Two utterances by the same speaker are two Documents. They are
// never merged: a classifier trained on the output must see one
// row per sentence, not one row per speaker.
//
// WordSet is a BTreeSet so iterating it is deterministic; callers
// should still treat it as an unordered set.
//
// Reference: Rust Book §5 (Structs), §8 (Collections)

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Distinct normalised words from a single sentence.
pub type WordSet = BTreeSet<String>;

/// One training example: an utterance's words and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Position of the originating record in the input sequence
    pub index: usize,

    /// Distinct normalised words of the utterance (may be empty)
    pub words: WordSet,

    /// Speaker label, already case-normalised by the loader
    pub label: String,
}

impl Document {
    pub fn new(index: usize, words: WordSet, label: impl Into<String>) -> Self {
        Self {
            index,
            words,
            label: label.into(),
        }
    }

    /// True when the utterance produced no words at all
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

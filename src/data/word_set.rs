// ============================================================
// Layer 4 — WordSet Builder
// ============================================================
// sentence → tokens → normalised tokens → distinct set
//
//   "Saying hi, saying bye" (Lancaster normaliser)
//     tokens:     [saying, hi, ",", saying, bye]
//     normalised: [say, hi, ",", say, bye]
//     word set:   {",", bye, hi, say}
//
// Only presence matters downstream, so the repeated "say"
// collapses to one entry and token frequency is dropped.
// Tokens that normalise to the empty string are discarded.

use crate::domain::document::WordSet;
use crate::domain::error::PipelineResult;
use crate::domain::traits::{Normalizer, Tokenizer};

pub struct WordSetBuilder<T, N> {
    tokenizer:  T,
    normalizer: N,
}

impl<T: Tokenizer, N: Normalizer> WordSetBuilder<T, N> {
    pub fn new(tokenizer: T, normalizer: N) -> Self {
        Self { tokenizer, normalizer }
    }

    /// Build the distinct normalised word set of one sentence.
    /// Tokenizer / normaliser failures propagate unchanged.
    pub fn build(&self, sentence: &str) -> PipelineResult<WordSet> {
        let mut words = WordSet::new();

        for token in self.tokenizer.tokenize(sentence)? {
            let word = self.normalizer.normalize(&token)?;
            if !word.is_empty() {
                words.insert(word);
            }
        }

        Ok(words)
    }
}

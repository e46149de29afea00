// ============================================================
// Layer 5 — Word Tokenizer
// ============================================================
// Splits a sentence into word-level tokens using the BERT
// pre-tokenizer from the `tokenizers` crate:
//
//   - whitespace separates tokens and is dropped
//   - every punctuation character becomes its own token
//
//   "hi, there!" → ["hi", ",", "there", "!"]
//
// Only the pre-tokenization step is used. There is no trained
// sub-word model here: the vocabulary is built from whole
// normalised words by the corpus organizer, not by this type.
//
// Reference: tokenizers crate (pre_tokenizers::bert)

use tokenizers::pre_tokenizers::bert::BertPreTokenizer;
use tokenizers::{OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer};

use crate::domain::error::{PipelineError, PipelineResult};
use crate::domain::traits::Tokenizer;

#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, sentence: &str) -> PipelineResult<Vec<String>> {
        if sentence.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut pretokenized = PreTokenizedString::from(sentence);
        BertPreTokenizer
            .pre_tokenize(&mut pretokenized)
            .map_err(|e| PipelineError::input("tokenizer", e.to_string()))?;

        Ok(pretokenized
            .get_splits(OffsetReferential::Original, OffsetType::Byte)
            .into_iter()
            .map(|(token, _, _)| token.to_string())
            .collect())
    }
}

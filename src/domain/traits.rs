// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The three collaborators the core depends on but does not own:
//
//   RecordSource → where (label, sentence) records come from
//   Tokenizer    → sentence → ordered raw tokens
//   Normalizer   → raw token → normalised / stemmed token
//
// The data layer only ever sees these traits, so a CSV loader
// and an in-memory fixture, or a Lancaster stemmer and an
// identity normaliser, are interchangeable.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::error::PipelineResult;
use crate::domain::record::RawRecord;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the full, ordered list of records.
///
/// Implementations:
///   - DelimitedLoader → two-column delimited text file
///   - InMemorySource  → records already in memory (tests, embedding)
pub trait RecordSource {
    /// Load every record, in source order. Any malformed row is fatal
    /// for the whole load.
    fn load_all(&self) -> PipelineResult<Vec<RawRecord>>;
}

// ─── Tokenizer ────────────────────────────────────────────────────────────────
/// Splits a sentence into raw tokens.
/// Must return an empty Vec for an empty or whitespace-only sentence.
pub trait Tokenizer {
    fn tokenize(&self, sentence: &str) -> PipelineResult<Vec<String>>;
}

// ─── Normalizer ───────────────────────────────────────────────────────────────
/// Maps one raw token to its canonical form.
/// Deterministic: the same input always produces the same output.
pub trait Normalizer {
    fn normalize(&self, token: &str) -> PipelineResult<String>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, sentence: &str) -> PipelineResult<Vec<String>> {
        (**self).tokenize(sentence)
    }
}

impl<T: Normalizer + ?Sized> Normalizer for &T {
    fn normalize(&self, token: &str) -> PipelineResult<String> {
        (**self).normalize(token)
    }
}

impl<T: Normalizer + ?Sized> Normalizer for Box<T> {
    fn normalize(&self, token: &str) -> PipelineResult<String> {
        (**self).normalize(token)
    }
}

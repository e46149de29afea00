// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits that define what the
// pipeline works with:
//
//   RawRecord   → one (label, sentence) line from the corpus
//   WordSet     → the distinct normalised words of one sentence
//   Document    → one WordSet + its label, one per record
//   OrderedSet  → a frozen, duplicate-free sequence (vocabulary,
//                 label set) that fixes every vector position
//
// Rules for this layer:
//   - NO file I/O
//   - NO tokenizer or stemmer internals
//   - Only data shapes, invariants, and the collaborator traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

/// Typed pipeline errors (input, precondition, invariant)
pub mod error;

/// A single labelled utterance as read from the corpus
pub mod record;

/// WordSet and Document, one per utterance
pub mod document;

/// Distinct-element sequence with index lookup
pub mod ordered_set;

/// Collaborator abstractions: RecordSource, Tokenizer, Normalizer
pub mod traits;

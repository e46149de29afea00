// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Concrete implementations of the collaborators the core only
// knows as traits, plus config persistence:
//
//   tokenizer.rs    — WordTokenizer
//                     Whitespace + punctuation pre-tokenizer built
//                     on the `tokenizers` crate.
//
//   stemmer.rs      — LancasterStemmer, IdentityNormalizer
//                     Token normalisers. Lancaster is the default.
//
//   config_store.rs — PipelineConfig as JSON
//                     Lets a run be saved and repeated exactly.
//
// Reference: Rust Book §7 (Modules)

/// Sentence → word tokens
pub mod tokenizer;

/// Token → normalised token
pub mod stemmer;

/// Pipeline config saving and loading
pub mod config_store;

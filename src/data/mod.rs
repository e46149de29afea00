// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from a delimited dialogue file to the two aligned
// training matrices.
//
// The pipeline flows in this order:
//
//   dialogue file
//       │
//       ▼
//   DelimitedLoader   → reads lines, cleans + lower-cases fields
//       │
//       ▼
//   CorpusOrganizer   → one Document per record, label set in
//       │               first-seen order, frozen vocabulary
//       │   (uses WordSetBuilder = Tokenizer + Normalizer)
//       ▼
//   TrainingSet       → feature rows + one-hot label rows
//       │   (uses the Vectorizer)
//       ▼
//   split_train_val   → optional seeded holdout
//
// Each module is responsible for exactly one step.

/// Reads (speaker, utterance) records from a delimited file
pub mod loader;

/// Cleans and lower-cases raw fields
pub mod preprocessor;

/// Sentence → distinct normalised words
pub mod word_set;

/// Records → vocabulary, label set, documents
pub mod organizer;

/// Subset → indicator vector over a fixed superset
pub mod vectorizer;

/// Documents → aligned feature and label matrices
pub mod training_set;

/// Seeded shuffle and train/validation split
pub mod splitter;

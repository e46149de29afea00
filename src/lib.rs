//! Turns a labelled corpus of short utterances into a binary
//! bag-of-words feature matrix and a one-hot speaker label matrix,
//! one row per utterance.
//!
//! ```
//! use dialogue_vectorizer::data::organizer::CorpusOrganizer;
//! use dialogue_vectorizer::data::training_set::TrainingSet;
//! use dialogue_vectorizer::domain::record::RawRecord;
//! use dialogue_vectorizer::infra::{stemmer::IdentityNormalizer, tokenizer::WordTokenizer};
//!
//! let records = vec![
//!     RawRecord::new("ana", "hi there"),
//!     RawRecord::new("bob", "hi"),
//!     RawRecord::new("ana", "there you are"),
//! ];
//! let corpus = CorpusOrganizer::new(WordTokenizer, IdentityNormalizer)
//!     .organize(&records)
//!     .unwrap();
//! let set = TrainingSet::from_corpus(&corpus).unwrap();
//!
//! assert_eq!(set.len(), 3);
//! assert_eq!(set.labels()[1].as_slice(), &[0, 1]);
//! ```

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;

// ============================================================
// Layer 4 — Corpus Organizer
// ============================================================
// Turns the ordered list of RawRecords into the three things the
// vectorizer needs:
//
//   vocabulary → every distinct normalised word in the corpus
//   labels     → every distinct speaker, in first-seen order
//   documents  → ONE (word set, label) per record
//
// Records are never grouped by speaker. Three lines from "ana"
// are three Documents, so the training matrix has one row per
// utterance.
//
// The work happens in two passes:
//
//   Pass 1: walk the records in order, build each WordSet, record
//           the label on first sight, push one Document.
//   Pass 2: derive the vocabulary ONCE from the finished documents.
//
// Nothing is vectorized until pass 2 has produced a frozen
// vocabulary, so every encode call sees the same positions.
//
// Reference: Rust Book §8 (Collections), §13 (Iterators)

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::data::word_set::WordSetBuilder;
use crate::domain::document::Document;
use crate::domain::error::PipelineResult;
use crate::domain::ordered_set::{LabelSet, Vocabulary};
use crate::domain::record::RawRecord;
use crate::domain::traits::{Normalizer, Tokenizer};

/// How vocabulary positions are assigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VocabularyOrder {
    /// Lexicographic order of the normalised words
    #[default]
    Sorted,
    /// Order in which words first appear, walking documents in input
    /// order and each document's words in sorted order
    FirstSeen,
}

impl fmt::Display for VocabularyOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sorted    => write!(f, "sorted"),
            Self::FirstSeen => write!(f, "first-seen"),
        }
    }
}

impl FromStr for VocabularyOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sorted"     => Ok(Self::Sorted),
            "first-seen" => Ok(Self::FirstSeen),
            other => Err(format!(
                "unknown vocabulary order '{other}' (expected 'sorted' or 'first-seen')"
            )),
        }
    }
}

/// Output of `CorpusOrganizer::organize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizedCorpus {
    pub vocabulary: Vocabulary,
    pub labels:     LabelSet,
    pub documents:  Vec<Document>,
}

impl OrganizedCorpus {
    /// Number of documents per label, in label-set order
    pub fn label_counts(&self) -> Vec<(String, usize)> {
        let mut counts = vec![0usize; self.labels.len()];
        for doc in &self.documents {
            if let Some(i) = self.labels.position(doc.label.as_str()) {
                counts[i] += 1;
            }
        }
        self.labels.iter().cloned().zip(counts).collect()
    }

    /// Documents whose utterance produced no words
    pub fn empty_documents(&self) -> usize {
        self.documents.iter().filter(|d| d.is_empty()).count()
    }
}

pub struct CorpusOrganizer<T, N> {
    words: WordSetBuilder<T, N>,
    order: VocabularyOrder,
}

impl<T: Tokenizer, N: Normalizer> CorpusOrganizer<T, N> {
    pub fn new(tokenizer: T, normalizer: N) -> Self {
        Self {
            words: WordSetBuilder::new(tokenizer, normalizer),
            order: VocabularyOrder::default(),
        }
    }

    pub fn with_order(mut self, order: VocabularyOrder) -> Self {
        self.order = order;
        self
    }

    pub fn organize(&self, records: &[RawRecord]) -> PipelineResult<OrganizedCorpus> {
        // ── Pass 1: one Document per record, labels in first-seen order ───────
        let mut labels    = LabelSet::new();
        let mut documents = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let words = self.words.build(&record.sentence).map_err(|e| {
                e.at(format!("record {} (label '{}')", index, record.label))
            })?;

            labels.push_if_absent(record.label.clone());
            documents.push(Document::new(index, words, record.label.clone()));
        }

        // ── Pass 2: freeze the vocabulary ─────────────────────────────────────
        let all_words = documents.iter().flat_map(|d| d.words.iter().cloned());
        let vocabulary: Vocabulary = match self.order {
            VocabularyOrder::Sorted    => all_words.collect::<BTreeSet<_>>().into_iter().collect(),
            VocabularyOrder::FirstSeen => all_words.collect(),
        };

        if documents.is_empty() {
            tracing::warn!("Corpus is empty, nothing to organise");
        }
        tracing::info!(
            "Organised {} documents: {} words ({} order), {} labels",
            documents.len(),
            vocabulary.len(),
            self.order,
            labels.len()
        );

        Ok(OrganizedCorpus { vocabulary, labels, documents })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::PipelineError;
    use crate::infra::stemmer::IdentityNormalizer;
    use crate::infra::tokenizer::WordTokenizer;

    fn organizer() -> CorpusOrganizer<WordTokenizer, IdentityNormalizer> {
        CorpusOrganizer::new(WordTokenizer, IdentityNormalizer)
    }

    fn example() -> Vec<RawRecord> {
        vec![
            RawRecord::new("ana", "hi there"),
            RawRecord::new("bob", "hi"),
            RawRecord::new("ana", "there you are"),
        ]
    }

    #[test]
    fn test_one_document_per_record() {
        let corpus = organizer().organize(&example()).unwrap();
        assert_eq!(corpus.documents.len(), 3);
        assert_eq!(
            corpus.documents.iter().map(|d| d.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_eq!(corpus.documents[2].label, "ana");
    }

    #[test]
    fn test_labels_in_first_seen_order() {
        let records = vec![
            RawRecord::new("cy", "a"),
            RawRecord::new("ana", "b"),
            RawRecord::new("cy", "c"),
            RawRecord::new("bob", "d"),
        ];
        let corpus = organizer().organize(&records).unwrap();
        assert_eq!(corpus.labels.as_slice(), &["cy", "ana", "bob"]);
    }

    #[test]
    fn test_vocabulary_is_union_of_word_sets() {
        let corpus = organizer().organize(&example()).unwrap();
        assert_eq!(corpus.vocabulary.as_slice(), &["are", "hi", "there", "you"]);

        for doc in &corpus.documents {
            assert!(doc.words.iter().all(|w| corpus.vocabulary.contains(w.as_str())));
        }
    }

    #[test]
    fn test_first_seen_vocabulary_order() {
        let corpus = organizer()
            .with_order(VocabularyOrder::FirstSeen)
            .organize(&example())
            .unwrap();
        // doc 0 {hi, there}, doc 1 {hi}, doc 2 {are, there, you}
        assert_eq!(corpus.vocabulary.as_slice(), &["hi", "there", "are", "you"]);
    }

    #[test]
    fn test_empty_input() {
        let corpus = organizer().organize(&[]).unwrap();
        assert!(corpus.vocabulary.is_empty());
        assert!(corpus.labels.is_empty());
        assert!(corpus.documents.is_empty());
    }

    #[test]
    fn test_empty_sentence_still_a_document() {
        let records = vec![RawRecord::new("ana", ""), RawRecord::new("bob", "hi")];
        let corpus  = organizer().organize(&records).unwrap();

        assert_eq!(corpus.documents.len(), 2);
        assert!(corpus.documents[0].is_empty());
        assert_eq!(corpus.labels.as_slice(), &["ana", "bob"]);
        assert_eq!(corpus.vocabulary.as_slice(), &["hi"]);
        assert_eq!(corpus.empty_documents(), 1);
    }

    #[test]
    fn test_label_counts() {
        let corpus = organizer().organize(&example()).unwrap();
        assert_eq!(
            corpus.label_counts(),
            vec![("ana".to_string(), 2), ("bob".to_string(), 1)]
        );
    }

    #[test]
    fn test_word_set_failure_names_record() {
        struct Broken;
        impl Tokenizer for Broken {
            fn tokenize(&self, _: &str) -> PipelineResult<Vec<String>> {
                Err(PipelineError::input("tokenizer", "bad input"))
            }
        }

        let err = CorpusOrganizer::new(Broken, IdentityNormalizer)
            .organize(&example())
            .unwrap_err();
        assert!(err.to_string().contains("record 0 (label 'ana') via tokenizer"));
    }

    #[test]
    fn test_vocabulary_order_parse() {
        assert_eq!("sorted".parse::<VocabularyOrder>().unwrap(), VocabularyOrder::Sorted);
        assert_eq!(
            "first-seen".parse::<VocabularyOrder>().unwrap(),
            VocabularyOrder::FirstSeen
        );
        assert!("random".parse::<VocabularyOrder>().is_err());
    }
}

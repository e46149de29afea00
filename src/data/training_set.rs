// ============================================================
// Layer 4 — Training Set
// ============================================================
// The final output of the pipeline: two aligned matrices.
//
//   features[k] → indicator vector of document k over the vocabulary
//   labels[k]   → one-hot vector of document k's label over the label set
//
// len(features) == len(labels) == len(documents), and row k of
// both describes document k. Widths are stored alongside the rows
// so an empty training set still reports its shape.

use crate::data::organizer::OrganizedCorpus;
use crate::data::splitter::split_train_val;
use crate::data::vectorizer::{encode, encode_one, IndicatorVector};
use crate::domain::document::Document;
use crate::domain::error::{PipelineError, PipelineResult};
use crate::domain::ordered_set::{LabelSet, Vocabulary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingSet {
    features:      Vec<IndicatorVector>,
    labels:        Vec<IndicatorVector>,
    feature_width: usize,
    label_width:   usize,
}

impl TrainingSet {
    /// Vectorize every document, in order.
    ///
    /// # Errors
    /// `PipelineError::InvariantViolation` if a document's label is not
    /// in `labels`. The organizer never produces such a document.
    pub fn build(
        vocabulary: &Vocabulary,
        labels:     &LabelSet,
        documents:  &[Document],
    ) -> PipelineResult<Self> {
        let mut feature_rows = Vec::with_capacity(documents.len());
        let mut label_rows   = Vec::with_capacity(documents.len());

        for doc in documents {
            if !labels.contains(doc.label.as_str()) {
                return Err(PipelineError::InvariantViolation {
                    index: doc.index,
                    label: doc.label.clone(),
                });
            }

            feature_rows.push(encode(vocabulary, &doc.words));
            label_rows.push(encode_one(labels, &doc.label));
        }

        tracing::info!(
            "Built training set: {} rows, {} features, {} labels",
            feature_rows.len(),
            vocabulary.len(),
            labels.len()
        );

        Ok(Self {
            features:      feature_rows,
            labels:        label_rows,
            feature_width: vocabulary.len(),
            label_width:   labels.len(),
        })
    }

    pub fn from_corpus(corpus: &OrganizedCorpus) -> PipelineResult<Self> {
        Self::build(&corpus.vocabulary, &corpus.labels, &corpus.documents)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn features(&self) -> &[IndicatorVector] {
        &self.features
    }

    pub fn labels(&self) -> &[IndicatorVector] {
        &self.labels
    }

    pub fn feature_width(&self) -> usize {
        self.feature_width
    }

    pub fn label_width(&self) -> usize {
        self.label_width
    }

    /// (features, label) of row `k`
    pub fn row(&self, k: usize) -> Option<(&IndicatorVector, &IndicatorVector)> {
        Some((self.features.get(k)?, self.labels.get(k)?))
    }

    pub fn rows(&self) -> impl Iterator<Item = (&IndicatorVector, &IndicatorVector)> {
        self.features.iter().zip(self.labels.iter())
    }

    /// Seeded shuffle-and-split of whole rows into (train, validation).
    /// Feature and label rows move together, so alignment holds in both halves.
    ///
    /// # Errors
    /// `PipelineError::Precondition` if `train_fraction` is outside `[0, 1]`.
    pub fn split(self, train_fraction: f64, seed: u64) -> PipelineResult<(Self, Self)> {
        if !(0.0..=1.0).contains(&train_fraction) {
            return Err(PipelineError::Precondition(format!(
                "train fraction must be within [0, 1], got {train_fraction}"
            )));
        }

        let (feature_width, label_width) = (self.feature_width, self.label_width);
        let rows: Vec<_> = self.features.into_iter().zip(self.labels).collect();
        let (train, val) = split_train_val(rows, train_fraction, seed);

        let assemble = |rows: Vec<(IndicatorVector, IndicatorVector)>| {
            let (features, labels) = rows.into_iter().unzip();
            Self { features, labels, feature_width, label_width }
        };

        Ok((assemble(train), assemble(val)))
    }
}

// ============================================================
// Layer 2 — BuildUseCase
// ============================================================
// Orchestrates the full vectorization pipeline in order:
//
//   Step 1: Load (speaker, utterance) records   (Layer 4 - data)
//   Step 2: Organise into documents + vocab     (Layer 4 - data)
//   Step 3: Vectorize into the training set     (Layer 4 - data)
//   Step 4: Optional seeded holdout split       (Layer 4 - data)
//   Step 5: Summarise what was built            (this layer)
//
// The matrices are handed back to the caller; nothing is written
// to disk here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::data::{
    loader::DelimitedLoader,
    organizer::{CorpusOrganizer, OrganizedCorpus, VocabularyOrder},
    training_set::TrainingSet,
};
use crate::domain::record::RawRecord;
use crate::domain::traits::{Normalizer, RecordSource};
use crate::infra::{
    stemmer::{IdentityNormalizer, LancasterStemmer},
    tokenizer::WordTokenizer,
};

// ─── Normaliser selection ────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NormalizerKind {
    #[default]
    Lancaster,
    Identity,
}

impl NormalizerKind {
    pub fn build(self) -> Box<dyn Normalizer> {
        match self {
            Self::Lancaster => Box::new(LancasterStemmer::new()),
            Self::Identity  => Box::new(IdentityNormalizer),
        }
    }
}

impl fmt::Display for NormalizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lancaster => write!(f, "lancaster"),
            Self::Identity  => write!(f, "identity"),
        }
    }
}

impl FromStr for NormalizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lancaster" => Ok(Self::Lancaster),
            "identity"  => Ok(Self::Identity),
            other => Err(format!(
                "unknown normalizer '{other}' (expected 'lancaster' or 'identity')"
            )),
        }
    }
}

// ─── Pipeline Configuration ──────────────────────────────────────────────────
// Serialisable so a run can be saved to JSON and repeated exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub input:       String,
    pub delimiter:   char,
    pub normalizer:  NormalizerKind,
    pub vocab_order: VocabularyOrder,
    /// Fraction of rows kept for training; the rest is held out.
    /// None disables the split.
    pub holdout:     Option<f64>,
    pub seed:        u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input:       "dialogue_data.csv".to_string(),
            delimiter:   ',',
            normalizer:  NormalizerKind::default(),
            vocab_order: VocabularyOrder::default(),
            holdout:     None,
            seed:        0,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.delimiter == '"' || self.delimiter == '\n' || self.delimiter == '\r' {
            anyhow::bail!("delimiter {:?} cannot be a quote or line break", self.delimiter);
        }
        if let Some(f) = self.holdout {
            if !(0.0..=1.0).contains(&f) {
                anyhow::bail!("holdout train fraction must be within [0, 1], got {f}");
            }
        }
        Ok(())
    }
}

// ─── Pipeline Output ─────────────────────────────────────────────────────────
pub struct PipelineOutput {
    pub records:      usize,
    pub corpus:       OrganizedCorpus,
    pub training_set: TrainingSet,
    /// (train, validation) when a holdout was requested
    pub split:        Option<(TrainingSet, TrainingSet)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSummary {
    pub label:     String,
    pub documents: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitSummary {
    pub train:      usize,
    pub validation: usize,
}

/// What a run produced, without the matrices themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildSummary {
    pub records:         usize,
    pub documents:       usize,
    pub empty_documents: usize,
    pub vocabulary_size: usize,
    pub feature_shape:   (usize, usize),
    pub label_shape:     (usize, usize),
    pub labels:          Vec<LabelSummary>,
    pub holdout:         Option<SplitSummary>,
}

impl PipelineOutput {
    pub fn summary(&self) -> BuildSummary {
        let set = self.split.as_ref();
        BuildSummary {
            records:         self.records,
            documents:       self.corpus.documents.len(),
            empty_documents: self.corpus.empty_documents(),
            vocabulary_size: self.corpus.vocabulary.len(),
            feature_shape:   (self.training_set.len(), self.training_set.feature_width()),
            label_shape:     (self.training_set.len(), self.training_set.label_width()),
            labels: self
                .corpus
                .label_counts()
                .into_iter()
                .map(|(label, documents)| LabelSummary { label, documents })
                .collect(),
            holdout: set.map(|(train, val)| SplitSummary {
                train:      train.len(),
                validation: val.len(),
            }),
        }
    }
}

// ─── BuildUseCase ────────────────────────────────────────────────────────────
pub struct BuildUseCase {
    config: PipelineConfig,
}

impl BuildUseCase {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Load records from the configured file and run the pipeline
    pub fn execute(&self) -> Result<PipelineOutput> {
        self.config.validate()?;

        let cfg    = &self.config;
        let loader = DelimitedLoader::new(&cfg.input).with_delimiter(cfg.delimiter);

        tracing::info!("Loading records from '{}'", cfg.input);
        let records = loader
            .load_all()
            .with_context(|| format!("Cannot load records from '{}'", cfg.input))?;
        self.run_records(records)
    }

    /// Run the pipeline over any record source
    pub fn run(&self, source: &dyn RecordSource) -> Result<PipelineOutput> {
        // ── Step 1: Load records ──────────────────────────────────────────────
        let records = source.load_all().context("Cannot load records")?;
        self.run_records(records)
    }

    fn run_records(&self, records: Vec<RawRecord>) -> Result<PipelineOutput> {
        let cfg = &self.config;

        // ── Step 2: Organise ──────────────────────────────────────────────────
        // One document per record; vocabulary frozen before Step 3.
        tracing::info!(
            "Organising {} records (normalizer={})",
            records.len(),
            cfg.normalizer
        );
        let organizer = CorpusOrganizer::new(WordTokenizer::new(), cfg.normalizer.build())
            .with_order(cfg.vocab_order);
        let corpus = organizer
            .organize(&records)
            .context("Cannot organise corpus")?;

        // ── Step 3: Vectorize ─────────────────────────────────────────────────
        let training_set = TrainingSet::from_corpus(&corpus)
            .context("Cannot build training set")?;

        // ── Step 4: Optional holdout ──────────────────────────────────────────
        let split = match cfg.holdout {
            Some(fraction) => {
                let (train, val) = training_set.clone().split(fraction, cfg.seed)?;
                tracing::info!(
                    "Split: {} train, {} validation",
                    train.len(),
                    val.len()
                );
                Some((train, val))
            }
            None => None,
        };

        Ok(PipelineOutput {
            records: records.len(),
            corpus,
            training_set,
            split,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::InMemorySource;
    use crate::domain::error::PipelineError;

    fn example_source() -> InMemorySource {
        InMemorySource::new(vec![
            RawRecord::new("ana", "hi there"),
            RawRecord::new("bob", "hi"),
            RawRecord::new("ana", "there you are"),
        ])
    }

    fn identity_config() -> PipelineConfig {
        PipelineConfig {
            normalizer: NormalizerKind::Identity,
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn test_run_worked_example() {
        let out     = BuildUseCase::new(identity_config()).run(&example_source()).unwrap();
        let summary = out.summary();

        assert_eq!(summary.records, 3);
        assert_eq!(summary.documents, 3);
        assert_eq!(summary.vocabulary_size, 4);
        assert_eq!(summary.feature_shape, (3, 4));
        assert_eq!(summary.label_shape, (3, 2));
        assert_eq!(
            summary.labels,
            vec![
                LabelSummary { label: "ana".into(), documents: 2 },
                LabelSummary { label: "bob".into(), documents: 1 },
            ]
        );
        assert!(summary.holdout.is_none());
        assert_eq!(out.training_set.labels()[1].as_slice(), &[0, 1]);
    }

    #[test]
    fn test_run_with_lancaster() {
        let out = BuildUseCase::new(PipelineConfig::default())
            .run(&example_source())
            .unwrap();
        // hi, ther, you, ar
        assert!(out.corpus.vocabulary.contains("ther"));
        assert!(out.corpus.vocabulary.contains("ar"));
        assert_eq!(out.corpus.vocabulary.len(), 4);
    }

    #[test]
    fn test_run_with_holdout() {
        let cfg = PipelineConfig {
            holdout: Some(2.0 / 3.0),
            seed:    9,
            ..identity_config()
        };
        let summary = BuildUseCase::new(cfg).run(&example_source()).unwrap().summary();
        assert_eq!(summary.holdout, Some(SplitSummary { train: 2, validation: 1 }));
    }

    #[test]
    fn test_run_empty_source() {
        let out = BuildUseCase::new(identity_config())
            .run(&InMemorySource::new(Vec::new()))
            .unwrap();
        let summary = out.summary();
        assert_eq!(summary.documents, 0);
        assert_eq!(summary.feature_shape, (0, 0));
        assert_eq!(summary.label_shape, (0, 0));
        assert!(summary.labels.is_empty());
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let cfg = PipelineConfig { delimiter: '"', ..PipelineConfig::default() };
        assert!(cfg.validate().is_err());

        let cfg = PipelineConfig { holdout: Some(-0.1), ..PipelineConfig::default() };
        assert!(cfg.validate().is_err());

        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_execute_missing_file_fails() {
        let cfg = PipelineConfig {
            input: std::env::temp_dir()
                .join("dialogue_vectorizer_does_not_exist.csv")
                .display()
                .to_string(),
            ..PipelineConfig::default()
        };
        assert!(BuildUseCase::new(cfg).execute().is_err());
    }

    struct FailingSource;

    impl RecordSource for FailingSource {
        fn load_all(&self) -> crate::domain::error::PipelineResult<Vec<RawRecord>> {
            Err(PipelineError::input("feed", "connection dropped"))
        }
    }

    #[test]
    fn test_run_error_does_not_name_config_input() {
        let err = BuildUseCase::new(PipelineConfig::default())
            .run(&FailingSource)
            .err()
            .unwrap();
        let msg = format!("{err:#}");
        assert!(msg.contains("connection dropped"), "{msg}");
        assert!(!msg.contains("dialogue_data.csv"), "{msg}");
    }

    #[test]
    fn test_execute_error_names_input_file() {
        let path = std::env::temp_dir().join("dialogue_vectorizer_execute_missing.csv");
        let _ = std::fs::remove_file(&path);
        let cfg = PipelineConfig {
            input: path.display().to_string(),
            ..PipelineConfig::default()
        };
        let msg = format!("{:#}", BuildUseCase::new(cfg).execute().err().unwrap());
        assert!(msg.contains("dialogue_vectorizer_execute_missing.csv"), "{msg}");
    }

    #[test]
    fn test_config_serde_names() {
        let json = serde_json::to_value(PipelineConfig::default()).unwrap();
        assert_eq!(json["normalizer"], "lancaster");
        assert_eq!(json["vocab_order"], "sorted");

        let cfg: PipelineConfig =
            serde_json::from_str(r#"{"normalizer":"identity","vocab_order":"first-seen"}"#).unwrap();
        assert_eq!(cfg.normalizer, NormalizerKind::Identity);
        assert_eq!(cfg.vocab_order, VocabularyOrder::FirstSeen);
        assert_eq!(cfg.delimiter, ',');
    }
}

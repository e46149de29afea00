// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the `build` subcommand and its flags.
//
// Every pipeline flag is optional: an unset flag leaves the value
// from --config (or the built-in default) untouched, so a saved
// config can be re-run with one or two overrides.

use clap::{Args, Subcommand};

use crate::application::build_use_case::{NormalizerKind, PipelineConfig};
use crate::data::organizer::VocabularyOrder;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the feature and label matrices from a dialogue file
    Build(BuildArgs),
}

#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Two-column delimited file: speaker, utterance (no header)
    #[arg(long)]
    pub input: Option<String>,

    /// Field delimiter
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Token normaliser: lancaster | identity
    #[arg(long)]
    pub normalizer: Option<NormalizerKind>,

    /// Vocabulary order: sorted | first-seen
    #[arg(long)]
    pub vocab_order: Option<VocabularyOrder>,

    /// Hold out rows for validation; value is the TRAIN fraction, e.g. 0.8
    #[arg(long)]
    pub holdout: Option<f64>,

    /// Seed for the holdout shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start from a JSON config file instead of the defaults
    #[arg(long)]
    pub config: Option<String>,

    /// Write the effective config to this JSON file
    #[arg(long)]
    pub save_config: Option<String>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl BuildArgs {
    /// Overlay the flags that were given on top of `base`
    pub fn apply(&self, mut base: PipelineConfig) -> PipelineConfig {
        if let Some(input) = &self.input {
            base.input = input.clone();
        }
        if let Some(d) = self.delimiter {
            base.delimiter = d;
        }
        if let Some(n) = self.normalizer {
            base.normalizer = n;
        }
        if let Some(o) = self.vocab_order {
            base.vocab_order = o;
        }
        if let Some(h) = self.holdout {
            base.holdout = Some(h);
        }
        if let Some(s) = self.seed {
            base.seed = s;
        }
        base
    }
}

/// Convert CLI BuildArgs into the application-layer PipelineConfig.
/// The application layer never sees clap types.
impl From<&BuildArgs> for PipelineConfig {
    fn from(a: &BuildArgs) -> Self {
        a.apply(PipelineConfig::default())
    }
}

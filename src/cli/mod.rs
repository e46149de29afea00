// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with `clap` and prints results.
// All pipeline work is delegated to Layer 2 (application).
//
// One command is supported:
//   `build` — vectorize a dialogue file and report the result

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{BuildArgs, Commands};

use crate::application::build_use_case::{BuildSummary, BuildUseCase, PipelineConfig};
use crate::infra::config_store::{load_config, save_config};

#[derive(Parser, Debug)]
#[command(
    name = "dialogue-vectorizer",
    version,
    about = "Turn a (speaker, utterance) corpus into binary bag-of-words training matrices."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Build(args) => run_build(args),
        }
    }
}

fn run_build(args: BuildArgs) -> Result<()> {
    let base = match &args.config {
        Some(path) => load_config(path)?,
        None       => PipelineConfig::default(),
    };
    let cfg = args.apply(base);
    cfg.validate()?;

    if let Some(path) = &args.save_config {
        save_config(path, &cfg)?;
        tracing::info!("Saved effective config to '{}'", path);
    }

    let summary = BuildUseCase::new(cfg).execute()?.summary();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(s: &BuildSummary) {
    println!("records:          {}", s.records);
    println!("documents:        {} ({} empty)", s.documents, s.empty_documents);
    println!("vocabulary:       {} words", s.vocabulary_size);
    println!("features matrix:  {} x {}", s.feature_shape.0, s.feature_shape.1);
    println!("labels matrix:    {} x {}", s.label_shape.0, s.label_shape.1);

    println!("labels:");
    for l in &s.labels {
        println!("  {:<16} {}", l.label, l.documents);
    }

    if let Some(h) = &s.holdout {
        println!("holdout:          {} train / {} validation", h.train, h.validation);
    }
}

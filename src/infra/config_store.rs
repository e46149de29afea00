// ============================================================
// Layer 5 — Config Store
// ============================================================
// Saves and loads a PipelineConfig as pretty-printed JSON, so a
// run can be repeated with exactly the same delimiter, normaliser,
// vocabulary order, holdout fraction, and seed.
//
// Missing fields in a loaded file fall back to their defaults
// (PipelineConfig is #[serde(default)]), so a config file only
// needs to mention what it changes.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::application::build_use_case::PipelineConfig;

pub fn save_config(path: impl AsRef<Path>, cfg: &PipelineConfig) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(cfg)?;

    fs::write(path, json)
        .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

    tracing::debug!("Saved pipeline config to '{}'", path.display());
    Ok(())
}

pub fn load_config(path: impl AsRef<Path>) -> Result<PipelineConfig> {
    let path = path.as_ref();

    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    let cfg = serde_json::from_str(&json)
        .with_context(|| format!("Invalid config JSON in '{}'", path.display()))?;

    tracing::debug!("Loaded pipeline config from '{}'", path.display());
    Ok(cfg)
}

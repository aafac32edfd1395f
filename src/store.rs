//! Parameter persistence
//!
//! Saves and restores the last-used strategy parameters as JSON under a
//! fixed key. The store holds only the six numeric inputs; results are never
//! persisted — every run recomputes from scratch.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::types::StrategyParams;

/// Fixed key the last-used parameters are stored under.
const LAST_PARAMS_KEY: &str = "last-params";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    entries: BTreeMap<String, StrategyParams>,
}

/// JSON-file-backed store for strategy parameters.
#[derive(Debug, Clone)]
pub struct ParamStore {
    path: PathBuf,
}

impl ParamStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ParamStore { path: path.into() }
    }

    /// Persist `params` as the last-used set, replacing any previous value.
    pub fn save_last(&self, params: &StrategyParams) -> Result<()> {
        let mut file = self.read_file()?;
        file.entries.insert(LAST_PARAMS_KEY.to_string(), *params);
        let contents =
            serde_json::to_string_pretty(&file).context("Failed to serialize parameter store")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "Saved last-used parameters");
        Ok(())
    }

    /// Load the last-used parameters, or `None` when nothing was saved yet.
    pub fn load_last(&self) -> Result<Option<StrategyParams>> {
        let file = self.read_file()?;
        Ok(file.entries.get(LAST_PARAMS_KEY).copied())
    }

    fn read_file(&self) -> Result<StoreFile> {
        if !self.path.exists() {
            return Ok(StoreFile::default());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        serde_json::from_str(&contents).context("Failed to parse parameter store JSON")
    }
}

//! Result export
//!
//! Serializes a complete run — parameters, result, advisory text and a
//! timestamp — into a JSON document the caller can hand to other tooling.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::types::{StrategyParams, StrategyResult};

/// Exportable snapshot of one calculation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub params: StrategyParams,
    pub result: StrategyResult,
    pub advice: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl ExportDocument {
    /// Snapshot a run at the current time.
    pub fn new(result: StrategyResult, advice: Vec<String>) -> Self {
        ExportDocument {
            params: result.params,
            result,
            advice,
            timestamp: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize export document")
    }

    /// Write the document to `path` as pretty-printed JSON.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write export to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Exported run");
        Ok(())
    }
}

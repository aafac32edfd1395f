//! Engine error types
//!
//! Two kinds only: aggregated validation failures (recoverable, the caller
//! corrects input and retries) and compute faults (a logic defect surfaced
//! during an already-validated run; the caller must discard partial output).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// One or more input parameters violated a validation rule
    #[error("invalid strategy parameters: {}", errors.join("; "))]
    Validation { errors: Vec<String> },

    /// Unexpected runtime fault inside a validated run
    #[error("computation fault: {0}")]
    Compute(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

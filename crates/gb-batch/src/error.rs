//! Batch-subsystem error type.

use thiserror::Error;

/// Errors that prevent a batch from starting (loading the manifest).
/// Per-item calculation failures are not errors at this level — they are
/// collected in the [`BatchReport`][crate::BatchReport].
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("manifest parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type BatchResult<T> = Result<T, BatchError>;

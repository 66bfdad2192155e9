//! Carrier-subsystem error type.

use gb_core::CarrierId;
use thiserror::Error;

/// Errors produced by `gb-carrier`.
#[derive(Debug, Error)]
pub enum CarrierError {
    #[error("{carrier} integration does not implement {operation}")]
    Unsupported {
        carrier:   CarrierId,
        operation: &'static str,
    },

    #[error("{0} authentication failed: {1}")]
    Auth(CarrierId, String),

    #[error("tracking payload parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type CarrierResult<T> = Result<T, CarrierError>;

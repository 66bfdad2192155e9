//! Geocoding-subsystem error type.

use thiserror::Error;

/// Errors produced by `gb-geo`.
///
/// `Timeout` and `Service` are transient: the geocoder retries them within
/// its `RetryPolicy` budget and degrades to `NotFound` when the budget is
/// exhausted.  They only reach callers that use a provider directly.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("geocoding service timed out")]
    Timeout,

    #[error("geocoding service error: {0}")]
    Service(String),

    #[error("invalid distance defaults: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GeoError {
    /// `true` for errors worth retrying (timeout / upstream service error).
    pub fn is_transient(&self) -> bool {
        matches!(self, GeoError::Timeout | GeoError::Service(_))
    }
}

pub type GeoResult<T> = Result<T, GeoError>;

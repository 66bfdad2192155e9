//! Engine error types.

use gb_core::TransportMode;
use thiserror::Error;

use crate::weight::WeightError;

/// Per-calculation failures surfaced to the caller.
///
/// Transient geocoding trouble never appears here — it is absorbed by the
/// distance estimator's default policy.
#[derive(Debug, Error)]
pub enum CalcError {
    /// Hard precondition: without both endpoints the engine can neither
    /// estimate distance nor decide international status, and fabricating a
    /// route would be silently wrong.
    #[error("package {tracking_number}: missing {end} address")]
    MissingAddress {
        tracking_number: String,
        /// "origin", "destination", or "origin and destination".
        end: &'static str,
    },

    #[error(transparent)]
    Weight(#[from] WeightError),

    /// Only reachable with an unvalidated factor table; the builder rejects
    /// incomplete tables at construction.
    #[error("no emission factor configured for mode {0}")]
    MissingFactor(TransportMode),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type CalcResult<T> = Result<T, CalcError>;

//! Batch outcome types.

use gb_emissions::{CalcError, EmissionResult};
use thiserror::Error;

/// Why one batch item produced no result.
#[derive(Debug, Error)]
pub enum ItemError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// The package record could not be produced at all (fetch/parse failed
    /// upstream of the engine).
    #[error("package source error: {0}")]
    Source(String),
}

/// One batch item, tagged with its input index.
///
/// The index is explicit because completion order under concurrency is not
/// input order; [`BatchReport`] items are always sorted back to input order.
#[derive(Debug)]
pub struct BatchItem {
    pub index:           usize,
    pub tracking_number: String,
    pub result:          Result<EmissionResult, ItemError>,
}

/// All item outcomes of one batch run, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub items: Vec<BatchItem>,
}

/// Aggregate statistics over a [`BatchReport`].
#[derive(Clone, Debug, PartialEq)]
pub struct BatchSummary {
    pub total:     usize,
    pub succeeded: usize,
    pub failed:    usize,
    /// `failed / total`, 0.0 for an empty batch.
    pub failure_rate: f64,
    /// First few distinct failure messages, for operator triage.
    pub representative_errors: Vec<String>,
}

/// How many distinct failure messages a summary keeps.
const REPRESENTATIVE_ERRORS: usize = 5;

impl BatchReport {
    /// Successful results, in input order.
    pub fn successes(&self) -> impl Iterator<Item = (usize, &EmissionResult)> {
        self.items
            .iter()
            .filter_map(|item| item.result.as_ref().ok().map(|r| (item.index, r)))
    }

    /// Sum of total emissions over all successful items.
    pub fn total_emissions_kg(&self) -> f64 {
        self.successes().map(|(_, r)| r.total_emissions_kg).sum()
    }

    pub fn summary(&self) -> BatchSummary {
        let total = self.items.len();
        let failed_messages: Vec<String> = self
            .items
            .iter()
            .filter_map(|item| item.result.as_ref().err().map(|e| e.to_string()))
            .collect();
        let failed = failed_messages.len();

        let mut representative_errors = Vec::new();
        for message in failed_messages {
            if representative_errors.len() >= REPRESENTATIVE_ERRORS {
                break;
            }
            if !representative_errors.contains(&message) {
                representative_errors.push(message);
            }
        }

        BatchSummary {
            total,
            succeeded: total - failed,
            failed,
            failure_rate: if total == 0 { 0.0 } else { failed as f64 / total as f64 },
            representative_errors,
        }
    }
}

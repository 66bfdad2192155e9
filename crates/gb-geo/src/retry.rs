//! Bounded-retry policy for transient geocoding failures.
//!
//! Passed as configuration rather than hardcoded control flow so tests can
//! inject a zero-delay policy.

use std::time::Duration;

/// How many times to run the geocoder's fallback sequence and how long to
/// wait between runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.  Must be ≥ 1.
    pub max_attempts: u32,
    /// Fixed delay between attempts.
    pub delay: Duration,
}

impl RetryPolicy {
    /// The production default: 3 attempts, 1 s apart.
    pub fn standard() -> Self {
        Self { max_attempts: 3, delay: Duration::from_secs(1) }
    }

    /// Zero-delay policy for tests.
    pub fn immediate(max_attempts: u32) -> Self {
        Self { max_attempts, delay: Duration::ZERO }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EmissionRow, FailureRow, OutputResult, SegmentRow};

/// Trait implemented by the CSV and SQLite writers.
pub trait OutputWriter {
    /// Write a batch of per-package result rows.
    fn write_results(&mut self, rows: &[EmissionRow]) -> OutputResult<()>;

    /// Write a batch of per-segment rows.
    fn write_segments(&mut self, rows: &[SegmentRow]) -> OutputResult<()>;

    /// Write a batch of failure rows.
    fn write_failures(&mut self, rows: &[FailureRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `emissions.csv` — one row per priced package
//! - `segments.csv`  — one row per transport leg
//! - `failures.csv`  — one row per failed package

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EmissionRow, FailureRow, OutputResult, SegmentRow};

/// Writes emission results to three CSV files.
pub struct CsvWriter {
    results:  Writer<File>,
    segments: Writer<File>,
    failures: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut results = Writer::from_path(dir.join("emissions.csv"))?;
        results.write_record([
            "tracking_number",
            "carrier",
            "transport_mode",
            "distance_km",
            "weight_kg",
            "is_dimensional",
            "emission_factor",
            "total_emissions_kg",
        ])?;

        let mut segments = Writer::from_path(dir.join("segments.csv"))?;
        segments.write_record([
            "tracking_number",
            "segment",
            "mode",
            "distance_km",
            "weight_kg",
            "emission_factor",
            "emissions_kg",
        ])?;

        let mut failures = Writer::from_path(dir.join("failures.csv"))?;
        failures.write_record(["tracking_number", "error"])?;

        Ok(Self {
            results,
            segments,
            failures,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_results(&mut self, rows: &[EmissionRow]) -> OutputResult<()> {
        for row in rows {
            self.results.write_record(&[
                row.tracking_number.clone(),
                row.carrier.clone(),
                row.transport_mode.clone(),
                row.distance_km.to_string(),
                row.weight_kg.to_string(),
                (row.is_dimensional as u8).to_string(),
                row.emission_factor.to_string(),
                row.total_emissions_kg.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_segments(&mut self, rows: &[SegmentRow]) -> OutputResult<()> {
        for row in rows {
            self.segments.write_record(&[
                row.tracking_number.clone(),
                row.segment.clone(),
                row.mode.clone(),
                row.distance_km.to_string(),
                row.weight_kg.to_string(),
                row.emission_factor.to_string(),
                row.emissions_kg.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_failures(&mut self, rows: &[FailureRow]) -> OutputResult<()> {
        for row in rows {
            self.failures
                .write_record(&[row.tracking_number.clone(), row.error.clone()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.results.flush()?;
        self.segments.flush()?;
        self.failures.flush()?;
        Ok(())
    }
}

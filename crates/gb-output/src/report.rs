//! Flattening a [`BatchReport`] into writer rows.

use gb_batch::BatchReport;
use gb_emissions::EmissionResult;

use crate::writer::OutputWriter;
use crate::{EmissionRow, FailureRow, OutputResult, SegmentRow};

/// Flatten one result into its per-package row.
pub fn result_row(result: &EmissionResult) -> EmissionRow {
    EmissionRow {
        tracking_number:    result.package.tracking_number.clone(),
        carrier:            result.package.carrier.to_string(),
        transport_mode:     result.transport_mode.to_string(),
        distance_km:        result.distance_km,
        weight_kg:          result.weight_used_kg,
        is_dimensional:     result.used_dimensional,
        emission_factor:    result.emission_factor,
        total_emissions_kg: result.total_emissions_kg,
    }
}

/// Flatten one result into its per-segment rows (main transit first).
pub fn segment_rows(result: &EmissionResult) -> Vec<SegmentRow> {
    result
        .segments
        .iter()
        .map(|segment| SegmentRow {
            tracking_number: result.package.tracking_number.clone(),
            segment:         segment.kind.to_string(),
            mode:            segment.mode.to_string(),
            distance_km:     segment.distance_km,
            weight_kg:       segment.weight_kg,
            emission_factor: segment.factor,
            emissions_kg:    segment.emissions_kg,
        })
        .collect()
}

/// Flatten a whole batch report into row vectors, preserving input order.
pub fn rows_from_report(
    report: &BatchReport,
) -> (Vec<EmissionRow>, Vec<SegmentRow>, Vec<FailureRow>) {
    let mut results = Vec::new();
    let mut segments = Vec::new();
    let mut failures = Vec::new();

    for item in &report.items {
        match &item.result {
            Ok(result) => {
                results.push(result_row(result));
                segments.extend(segment_rows(result));
            }
            Err(e) => failures.push(FailureRow {
                tracking_number: item.tracking_number.clone(),
                error:           e.to_string(),
            }),
        }
    }

    (results, segments, failures)
}

/// Write a whole batch report through `writer` and finish it.
pub fn write_report<W: OutputWriter>(writer: &mut W, report: &BatchReport) -> OutputResult<()> {
    let (results, segments, failures) = rows_from_report(report);
    writer.write_results(&results)?;
    writer.write_segments(&segments)?;
    writer.write_failures(&failures)?;
    writer.finish()
}

//! Batch manifest CSV loader.
//!
//! # CSV format
//!
//! One row per package.  Header names are matched tolerantly because
//! manifests come from hand-maintained spreadsheets:
//!
//! | Column                  | Accepted headers                                      |
//! |-------------------------|-------------------------------------------------------|
//! | tracking number (req.)  | `tracking_number`, `Tracking Number`, `TrackingNumber`|
//! | carrier (req.)          | `carrier`, `Carrier`, `Item`, `Service`               |
//! | dimensions (opt.)       | `length_cm`, `width_cm`, `height_cm`                  |
//!
//! ```csv
//! Tracking Number,Item,length_cm,width_cm,height_cm
//! 1ZA81H440313373222,UPS,50,40,30
//! 794644790132,FedEx,,,
//! ```
//!
//! Header matching ignores case and surrounding whitespace.  Tracking
//! numbers are trimmed and stripped of trailing underscores (a spreadsheet
//! export artifact).  A malformed row (unknown carrier, unparseable
//! dimension) is skipped with a note rather than aborting the file; missing
//! required *columns* abort, since no row could ever parse.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use gb_core::{CarrierId, Dimensions};

use crate::{BatchError, BatchResult};

// ── Entry ─────────────────────────────────────────────────────────────────────

/// One manifest row: which package to price, and the caller-supplied
/// dimensions to append after the carrier parse.
#[derive(Clone, Debug, PartialEq)]
pub struct ManifestEntry {
    pub tracking_number: String,
    pub carrier:         CarrierId,
    pub dimensions:      Option<Dimensions>,
}

/// A loaded manifest: usable entries plus notes for rows that were skipped.
#[derive(Clone, Debug, Default)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
    /// `(1-based data row number, reason)` for each skipped row.
    pub skipped: Vec<(usize, String)>,
}

// ── Loaders ───────────────────────────────────────────────────────────────────

/// Load a manifest from a CSV file.
pub fn load_manifest_csv(path: &Path) -> BatchResult<Manifest> {
    let file = std::fs::File::open(path)?;
    load_manifest_reader(file)
}

/// Like [`load_manifest_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_manifest_reader<R: Read>(reader: R) -> BatchResult<Manifest> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let tracking_col = find_column(&headers, &["tracking_number", "tracking number", "trackingnumber"])
        .ok_or_else(|| BatchError::Parse("no tracking number column found".into()))?;
    let carrier_col = find_column(&headers, &["carrier", "item", "service"])
        .ok_or_else(|| BatchError::Parse("no carrier column found".into()))?;
    let length_col = find_column(&headers, &["length_cm"]);
    let width_col  = find_column(&headers, &["width_cm"]);
    let height_col = find_column(&headers, &["height_cm"]);

    let mut manifest = Manifest::default();

    for (row_idx, result) in csv_reader.records().enumerate() {
        let row_number = row_idx + 1;
        let record = result?;

        match parse_row(&record, tracking_col, carrier_col, length_col, width_col, height_col) {
            Ok(entry) => manifest.entries.push(entry),
            Err(reason) => {
                log::warn!("manifest row {row_number} skipped: {reason}");
                manifest.skipped.push((row_number, reason));
            }
        }
    }

    log::info!(
        "loaded {} manifest entries ({} skipped)",
        manifest.entries.len(),
        manifest.skipped.len()
    );
    Ok(manifest)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn find_column(headers: &csv::StringRecord, candidates: &[&str]) -> Option<usize> {
    headers.iter().position(|h| {
        let normalized = h.trim().to_ascii_lowercase();
        candidates.contains(&normalized.as_str())
    })
}

fn parse_row(
    record:       &csv::StringRecord,
    tracking_col: usize,
    carrier_col:  usize,
    length_col:   Option<usize>,
    width_col:    Option<usize>,
    height_col:   Option<usize>,
) -> Result<ManifestEntry, String> {
    let tracking_number = record
        .get(tracking_col)
        .unwrap_or("")
        .trim()
        .trim_end_matches('_')
        .to_string();
    if tracking_number.is_empty() {
        return Err("empty tracking number".into());
    }

    let carrier_raw = record.get(carrier_col).unwrap_or("").trim();
    let carrier = CarrierId::from_str(carrier_raw).map_err(|e| e.to_string())?;

    let dimensions = parse_dimensions(record, length_col, width_col, height_col)?;

    Ok(ManifestEntry { tracking_number, carrier, dimensions })
}

/// All three dimension cells present and non-empty → `Some`; all empty or
/// columns absent → `None`; anything in between is a malformed row.
fn parse_dimensions(
    record:     &csv::StringRecord,
    length_col: Option<usize>,
    width_col:  Option<usize>,
    height_col: Option<usize>,
) -> Result<Option<Dimensions>, String> {
    let cell = |col: Option<usize>| -> Option<&str> {
        col.and_then(|i| record.get(i)).map(str::trim).filter(|s| !s.is_empty())
    };

    match (cell(length_col), cell(width_col), cell(height_col)) {
        (None, None, None) => Ok(None),
        (Some(l), Some(w), Some(h)) => {
            let parse = |name: &str, s: &str| -> Result<f64, String> {
                s.parse::<f64>().map_err(|_| format!("invalid {name} {s:?}"))
            };
            Ok(Some(Dimensions::new(
                parse("length_cm", l)?,
                parse("width_cm", w)?,
                parse("height_cm", h)?,
            )))
        }
        _ => Err("partial dimensions: need all of length_cm, width_cm, height_cm".into()),
    }
}

//! `gb-output` — emission-result export backends.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                      |
//! |-----------|---------|----------------------------------------------------|
//! | *(none)*  | CSV     | `emissions.csv`, `segments.csv`, `failures.csv`    |
//! | `sqlite`  | SQLite  | `emissions.db`                                     |
//!
//! All backends implement [`OutputWriter`] and are fed flat [`row`] types.
//! [`write_report`] flattens a whole batch report into one writer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gb_output::{CsvWriter, write_report};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! write_report(&mut writer, &report)?;
//! ```

pub mod csv;
pub mod error;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use report::{rows_from_report, write_report};
pub use row::{EmissionRow, FailureRow, SegmentRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

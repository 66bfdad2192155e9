//! `gb-batch` — run the emissions engine over many tracking records.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`manifest`] | `ManifestEntry`, tolerant CSV loader                     |
//! | [`runner`]   | `BatchRunner` (bounded worker pool)                      |
//! | [`report`]   | `BatchItem`, `BatchReport`, `BatchSummary`, `ItemError`  |
//! | [`error`]    | `BatchError`, `BatchResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Runs items on a Rayon pool of exactly `concurrency` threads. |
//!
//! # Contract
//!
//! Each item is an independent, at-most-once invocation of the engine:
//! no transaction spans packages, one failed package never aborts the batch,
//! and results are re-associated with input order by explicit index because
//! completion order under concurrency is not input order.

pub mod error;
pub mod manifest;
pub mod report;
pub mod runner;


pub use error::{BatchError, BatchResult};
pub use manifest::{load_manifest_csv, load_manifest_reader, Manifest, ManifestEntry};
pub use report::{BatchItem, BatchReport, BatchSummary, ItemError};
pub use runner::BatchRunner;

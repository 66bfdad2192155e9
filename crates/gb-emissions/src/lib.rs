//! `gb-emissions` — the emissions calculation engine.
//!
//! Turns a normalized [`PackageInfo`][gb_core::PackageInfo] into a
//! reproducible, auditable emissions estimate: resolve the chargeable
//! weight, estimate the transit distance, classify the transport mode, and
//! price each leg of the journey in kg CO₂e.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`weight`]  | `resolve_weight`, `DimensionalDivisors`, `WeightError`    |
//! | [`factors`] | `EmissionFactors` table + validation + CSV overrides      |
//! | [`result`]  | `EmissionSegment`, `EmissionResult`, `SegmentKind`        |
//! | [`builder`] | `CalculatorBuilder` (validated construction)              |
//! | [`engine`]  | `EmissionsCalculator` — the 7-step calculation            |
//! | [`error`]   | `CalcError`, `CalcResult<T>`                              |
//!
//! # Failure semantics
//!
//! Missing origin/destination is the only per-package hard failure.
//! Geocoding trouble degrades to default distances inside `gb-geo`; unknown
//! carriers and service codes degrade to default modes inside `gb-carrier`;
//! configuration gaps (incomplete factor table, non-positive defaults) are
//! rejected once at construction, not per request.

pub mod builder;
pub mod engine;
pub mod error;
pub mod factors;
pub mod result;
pub mod weight;


pub use builder::CalculatorBuilder;
pub use engine::EmissionsCalculator;
pub use error::{CalcError, CalcResult};
pub use factors::EmissionFactors;
pub use result::{EmissionResult, EmissionSegment, SegmentKind};
pub use weight::{resolve_weight, DimensionalDivisors, ResolvedWeight, WeightError};

//! Emission-factor table: kg CO₂e per tonne-km, per transport mode.
//!
//! The table is process-wide, read-only configuration.  A mode without a
//! factor is a configuration error caught by [`EmissionFactors::validate`]
//! at startup — never a per-request condition to recover from silently.
//!
//! # CSV overrides
//!
//! Deployments can adjust individual factors without a rebuild:
//!
//! ```csv
//! mode,factor
//! ground_standard,0.131
//! rail_standard,0.019
//! ```
//!
//! Rows replace entries of the standard table; unknown mode labels are
//! rejected so a typo cannot silently leave a stale factor in place.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use gb_core::{GbError, TransportMode};
use serde::Deserialize;

// ── Table ─────────────────────────────────────────────────────────────────────

/// Closed mapping from transport mode to emission factor (kg CO₂e/tonne-km).
#[derive(Clone, Debug)]
pub struct EmissionFactors {
    table: HashMap<TransportMode, f64>,
}

impl EmissionFactors {
    /// The shipped table.
    ///
    /// Ground tiers rise with speed (less consolidation, more direct
    /// routing); long-haul air sits below short-haul because cruise burn
    /// dominates the per-km figure.  Derived from EPA SmartWay and GLEC
    /// Framework published values.
    pub fn standard() -> Self {
        use TransportMode::*;
        let table = HashMap::from([
            (GroundEconomy,    0.062),
            (GroundStandard,   0.127),
            (GroundExpedited,  0.180),
            (GroundTwoDay,     0.220),
            (AirNextDayEarly,  0.90),
            (AirNextDay,       0.82),
            (AirNextDaySaver,  0.78),
            (AirTwoDay,        0.75),
            (AirTwoDayEarly,   0.77),
            (AirThreeDay,      0.72),
            (AirIntlExpress,   0.75),
            (AirIntlExpedited, 0.69),
            (AirIntlSaver,     0.65),
            (OceanStandard,    0.010),
            (OceanExpedited,   0.015),
            (RailStandard,     0.022),
            (LastMileStandard, 0.200),
            (LastMileUrban,    0.307),
            (FreightLtl,       0.150),
            (FreightFtl,       0.062),
            (MailInnovations,  0.180),
            (SurePost,         0.180),
        ]);
        Self { table }
    }

    /// Empty table for tests that build synthetic configurations.
    pub fn empty() -> Self {
        Self { table: HashMap::new() }
    }

    /// Insert or replace one factor (builder style).
    pub fn with(mut self, mode: TransportMode, factor: f64) -> Self {
        self.table.insert(mode, factor);
        self
    }

    /// The factor for `mode`, if configured.
    pub fn get(&self, mode: TransportMode) -> Option<f64> {
        self.table.get(&mode).copied()
    }

    /// Completeness check against the closed mode set: every mode present,
    /// every factor strictly positive.  Run once before accepting
    /// calculation requests.
    pub fn validate(&self) -> Result<(), GbError> {
        for mode in TransportMode::ALL {
            match self.table.get(&mode) {
                None => {
                    return Err(GbError::Config(format!("no emission factor for mode {mode}")));
                }
                Some(&f) if f <= 0.0 => {
                    return Err(GbError::Config(format!(
                        "emission factor for {mode} must be positive, got {f}"
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    // ── CSV overrides ─────────────────────────────────────────────────────

    /// Standard table with overrides applied from a CSV file.
    pub fn with_overrides_csv(path: &Path) -> Result<Self, GbError> {
        let file = std::fs::File::open(path)?;
        Self::with_overrides_reader(file)
    }

    /// Like [`with_overrides_csv`][Self::with_overrides_csv] but accepts any
    /// `Read` source.  Useful for testing (pass a `std::io::Cursor`).
    pub fn with_overrides_reader<R: Read>(reader: R) -> Result<Self, GbError> {
        #[derive(Deserialize)]
        struct FactorRecord {
            mode:   String,
            factor: f64,
        }

        let mut factors = Self::standard();
        let mut csv_reader = csv::Reader::from_reader(reader);
        for result in csv_reader.deserialize::<FactorRecord>() {
            let row = result.map_err(|e| GbError::Parse(e.to_string()))?;
            let mode = TransportMode::parse(row.mode.trim()).ok_or_else(|| {
                GbError::Parse(format!("unknown transport mode {:?} in factor overrides", row.mode))
            })?;
            factors.table.insert(mode, row.factor);
        }
        Ok(factors)
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self::standard()
    }
}

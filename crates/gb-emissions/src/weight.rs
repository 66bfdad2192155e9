//! Chargeable-weight resolution: declared vs. dimensional.
//!
//! Carriers bill the larger of the declared weight and the volumetric
//! (dimensional) weight, and this system attributes emissions the same way.

use std::collections::HashMap;

use gb_core::{CarrierId, Dimensions};
use thiserror::Error;

/// Invalid package-measurement input.  Never clamped or defaulted — bad data
/// is surfaced at this boundary.
#[derive(Debug, Error, PartialEq)]
pub enum WeightError {
    #[error("declared weight must be non-negative, got {0} kg")]
    NegativeWeight(f64),

    #[error("dimensions must be positive, got {length_cm}×{width_cm}×{height_cm} cm")]
    InvalidDimensions {
        length_cm: f64,
        width_cm:  f64,
        height_cm: f64,
    },
}

// ── Divisors ──────────────────────────────────────────────────────────────────

/// Volume → kg divisors (cm³ per kg), per carrier.
///
/// 5000 is the standard metric air-cargo convention and applies to every
/// carrier unless an override is configured.
#[derive(Clone, Debug)]
pub struct DimensionalDivisors {
    default_divisor: f64,
    overrides:       HashMap<CarrierId, f64>,
}

impl DimensionalDivisors {
    /// The metric air-cargo convention: 5000 cm³/kg for everyone.
    pub fn standard() -> Self {
        Self {
            default_divisor: 5_000.0,
            overrides:       HashMap::new(),
        }
    }

    /// Override one carrier's divisor (builder style).
    pub fn with(mut self, carrier: CarrierId, divisor: f64) -> Self {
        self.overrides.insert(carrier, divisor);
        self
    }

    pub fn divisor_for(&self, carrier: CarrierId) -> f64 {
        self.overrides
            .get(&carrier)
            .copied()
            .unwrap_or(self.default_divisor)
    }

    /// Divisors convert volume to weight by division; zero or negative
    /// values would produce nonsense weights.
    pub fn validate(&self) -> Result<(), String> {
        if self.default_divisor <= 0.0 {
            return Err(format!("default divisor must be positive, got {}", self.default_divisor));
        }
        for (carrier, divisor) in &self.overrides {
            if *divisor <= 0.0 {
                return Err(format!("divisor for {carrier} must be positive, got {divisor}"));
            }
        }
        Ok(())
    }
}

impl Default for DimensionalDivisors {
    fn default() -> Self {
        Self::standard()
    }
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// The chargeable weight chosen for a package.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedWeight {
    pub weight_kg:        f64,
    /// `true` iff the volumetric weight was strictly greater than declared.
    pub used_dimensional: bool,
}

/// Choose between declared and volumetric weight.
///
/// No dimensions → declared weight unchanged.  With dimensions, volumetric
/// weight is `volume_cm³ / divisor`; the strictly larger of the two wins.
pub fn resolve_weight(
    declared_kg: f64,
    dimensions:  Option<Dimensions>,
    carrier:     CarrierId,
    divisors:    &DimensionalDivisors,
) -> Result<ResolvedWeight, WeightError> {
    if declared_kg < 0.0 {
        return Err(WeightError::NegativeWeight(declared_kg));
    }

    let Some(dims) = dimensions else {
        return Ok(ResolvedWeight { weight_kg: declared_kg, used_dimensional: false });
    };

    if !dims.is_valid() {
        return Err(WeightError::InvalidDimensions {
            length_cm: dims.length_cm,
            width_cm:  dims.width_cm,
            height_cm: dims.height_cm,
        });
    }

    let volumetric_kg = dims.volume_cm3() / divisors.divisor_for(carrier);
    if volumetric_kg > declared_kg {
        log::debug!("using dimensional weight: {volumetric_kg:.2} kg (declared {declared_kg:.2} kg)");
        Ok(ResolvedWeight { weight_kg: volumetric_kg, used_dimensional: true })
    } else {
        Ok(ResolvedWeight { weight_kg: declared_kg, used_dimensional: false })
    }
}

//! Normalized package record — the engine's sole input type.
//!
//! Carrier adapters guarantee on construction: weight is non-negative when
//! present, addresses carry at least one of {city, postal code} plus country,
//! and `carrier` is one of the recognized identifiers.  The record is
//! immutable for the duration of a calculation; the only in-place extension
//! is [`PackageInfo::with_dimensions`], which appends caller-supplied
//! dimensions after the authoritative parse.

use crate::{Address, CarrierId};

/// Physical package dimensions in centimetres.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub length_cm: f64,
    pub width_cm:  f64,
    pub height_cm: f64,
}

impl Dimensions {
    pub fn new(length_cm: f64, width_cm: f64, height_cm: f64) -> Self {
        Self { length_cm, width_cm, height_cm }
    }

    /// Volume in cubic centimetres.
    #[inline]
    pub fn volume_cm3(self) -> f64 {
        self.length_cm * self.width_cm * self.height_cm
    }

    /// `true` iff every side is strictly positive.
    pub fn is_valid(self) -> bool {
        self.length_cm > 0.0 && self.width_cm > 0.0 && self.height_cm > 0.0
    }
}

/// A normalized tracking record for one shipped package.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackageInfo {
    /// Carrier-scoped tracking number.  Non-empty.
    pub tracking_number: String,

    /// Declared (actual) weight in kilograms, ≥ 0.
    pub weight_kg: f64,

    /// Physical dimensions, when the caller or carrier supplied them.
    pub dimensions: Option<Dimensions>,

    pub origin:      Option<Address>,
    pub destination: Option<Address>,

    /// Carrier's raw service code (e.g. UPS "03").
    pub service_code: Option<String>,

    /// Human-readable service description; doubles as the air/ground
    /// disambiguation hint for the default-distance policy.
    pub service_description: Option<String>,

    pub carrier: CarrierId,

    /// Pickup date as an ISO-8601 string, when the carrier reported one.
    pub pickup_date: Option<String>,
}

impl PackageInfo {
    /// Minimal record: tracking number, weight, carrier.  Everything else
    /// starts `None` and is filled in by the adapter.
    pub fn new(tracking_number: impl Into<String>, weight_kg: f64, carrier: CarrierId) -> Self {
        Self {
            tracking_number: tracking_number.into(),
            weight_kg,
            dimensions: None,
            origin: None,
            destination: None,
            service_code: None,
            service_description: None,
            carrier,
            pickup_date: None,
        }
    }

    /// Append caller-supplied dimensions (e.g. from a batch manifest row)
    /// after the authoritative carrier parse.
    pub fn with_dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// The service description, or `"ground"` when the carrier sent none —
    /// the neutral hint for the default-distance policy.
    pub fn service_hint(&self) -> &str {
        self.service_description.as_deref().unwrap_or("ground")
    }
}

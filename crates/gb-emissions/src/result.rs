//! Calculation output types.
//!
//! An [`EmissionResult`] is created once per successful calculation and
//! never mutated afterwards; reporting and export consume it read-only.

use gb_core::{PackageInfo, TransportMode};

/// Which leg of the journey a segment describes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentKind {
    MainTransit,
    LastMileDelivery,
}

impl SegmentKind {
    /// Report label, matching the column values in exported rows.
    pub fn as_str(self) -> &'static str {
        match self {
            SegmentKind::MainTransit      => "Main Transit",
            SegmentKind::LastMileDelivery => "Last Mile Delivery",
        }
    }
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One priced leg of transport.
///
/// Invariant: `emissions_kg = (weight_kg / 1000) * distance_km * factor`
/// to floating-point tolerance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmissionSegment {
    pub kind:        SegmentKind,
    pub mode:        TransportMode,
    pub distance_km: f64,
    pub weight_kg:   f64,
    /// kg CO₂e per tonne-km.
    pub factor:      f64,
    pub emissions_kg: f64,
}

/// The complete result of one package calculation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmissionResult {
    /// Sum of all segment emissions.
    pub total_emissions_kg: f64,

    /// Chargeable weight used for every segment.
    pub weight_used_kg: f64,

    /// `true` iff dimensional weight exceeded declared weight.
    pub used_dimensional: bool,

    /// Main-transit distance (the last-mile leg is not included here).
    pub distance_km: f64,

    /// Transport mode of the main leg.
    pub transport_mode: TransportMode,

    /// Emission factor of the main leg.
    pub emission_factor: f64,

    /// Main transit first; optional last-mile second.
    pub segments: Vec<EmissionSegment>,

    /// The package this result was computed from.
    pub package: PackageInfo,
}

impl EmissionResult {
    /// The main-transit segment (always present).
    pub fn main_segment(&self) -> &EmissionSegment {
        &self.segments[0]
    }

    /// The last-mile segment, absent when the main mode is itself last-mile.
    pub fn last_mile_segment(&self) -> Option<&EmissionSegment> {
        self.segments.get(1)
    }
}

//! Point-to-point distance estimation with a policy-default fallback.

use gb_core::Address;

use crate::geocoder::{GeocodeProvider, Geocoder};
use crate::{GeoError, RetryPolicy};

// ── Default distances ─────────────────────────────────────────────────────────

/// Fixed fallback distances (km) used when geocoding cannot resolve both
/// endpoints.  Configuration, not derived.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistanceDefaults {
    pub international_km:   f64,
    pub domestic_air_km:    f64,
    pub domestic_ground_km: f64,
    /// Length of the synthetic local-delivery leg appended by the engine.
    pub last_mile_km:       f64,
}

impl DistanceDefaults {
    /// Reject zero or negative defaults — a non-positive distance would
    /// silently zero out emissions downstream.
    pub fn validate(&self) -> Result<(), GeoError> {
        let entries = [
            ("international_km", self.international_km),
            ("domestic_air_km", self.domestic_air_km),
            ("domestic_ground_km", self.domestic_ground_km),
            ("last_mile_km", self.last_mile_km),
        ];
        for (name, value) in entries {
            if value <= 0.0 {
                return Err(GeoError::Config(format!("{name} must be positive, got {value}")));
            }
        }
        Ok(())
    }
}

impl Default for DistanceDefaults {
    fn default() -> Self {
        Self {
            international_km:   5_000.0,
            domestic_air_km:    1_500.0,
            domestic_ground_km: 1_200.0,
            last_mile_km:       10.0,
        }
    }
}

// ── DistanceEstimator ─────────────────────────────────────────────────────────

/// Produces a positive transit distance between two addresses.
///
/// Geocoding both endpoints yields the authoritative great-circle distance.
/// Anything less degrades to the three-tier default policy — the estimator
/// never fails and never returns zero.
#[derive(Debug)]
pub struct DistanceEstimator<P: GeocodeProvider> {
    geocoder: Geocoder<P>,
    defaults: DistanceDefaults,
}

impl<P: GeocodeProvider> DistanceEstimator<P> {
    pub fn new(provider: P, retry: RetryPolicy, defaults: DistanceDefaults) -> Self {
        Self {
            geocoder: Geocoder::new(provider, retry),
            defaults,
        }
    }

    /// Estimated distance in km from `origin` to `destination`.
    ///
    /// `service_hint` is the human-readable service description; it only
    /// matters when geocoding fails and the domestic tiers must be told
    /// apart (case-insensitive substring match on "air").
    pub fn estimate(&self, origin: &Address, destination: &Address, service_hint: &str) -> f64 {
        if let (Some(from), Some(to)) =
            (self.geocoder.resolve(origin), self.geocoder.resolve(destination))
        {
            let km = from.distance_km(to);
            log::debug!("great-circle distance: {km:.2} km");
            return km;
        }

        log::debug!("geocoding unavailable, using default distance");

        // Tier 1: differing countries → international default.
        if let (Some(from_country), Some(to_country)) = (origin.country(), destination.country()) {
            if !from_country.eq_ignore_ascii_case(to_country) {
                return self.defaults.international_km;
            }
        }

        // Tier 2: air service hint → domestic air default.
        if service_hint.to_ascii_lowercase().contains("air") {
            return self.defaults.domestic_air_km;
        }

        // Tier 3: domestic ground default.
        self.defaults.domestic_ground_km
    }

    /// The configured defaults (the engine reads `last_mile_km` from here).
    pub fn defaults(&self) -> &DistanceDefaults {
        &self.defaults
    }

    /// The underlying geocoder (test/diagnostic hook).
    pub fn geocoder(&self) -> &Geocoder<P> {
        &self.geocoder
    }
}

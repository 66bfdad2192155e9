//! The emissions calculation engine.

use gb_carrier::ServiceCatalog;
use gb_core::{PackageInfo, TransportMode};
use gb_geo::geocoder::GeocodeProvider;
use gb_geo::DistanceEstimator;

use crate::result::{EmissionResult, EmissionSegment, SegmentKind};
use crate::weight::{resolve_weight, DimensionalDivisors};
use crate::{CalcError, CalcResult, EmissionFactors};

/// Computes a segmented emissions estimate for one package at a time.
///
/// # Type parameter
///
/// `P` must implement [`GeocodeProvider`] (e.g.
/// [`gb_geo::NominatimProvider`] in production,
/// [`gb_geo::StaticProvider`] in tests).  Swap it at construction for a
/// different geocoding backend with no runtime overhead.
///
/// # Purity & concurrency
///
/// `calculate` takes `&self` and has no side effects beyond warming the
/// internal geocode cache, so one calculator can serve many batch workers
/// concurrently.  Two calls with the same package (and the same cache
/// state) produce identical results.
///
/// Construct via [`CalculatorBuilder`][crate::CalculatorBuilder], which
/// validates the factor table, distance defaults, divisors, and service
/// catalog once up front.
#[derive(Debug)]
pub struct EmissionsCalculator<P: GeocodeProvider> {
    pub(crate) distance: DistanceEstimator<P>,
    pub(crate) factors:  EmissionFactors,
    pub(crate) divisors: DimensionalDivisors,
    pub(crate) services: ServiceCatalog,
}

impl<P: GeocodeProvider> EmissionsCalculator<P> {
    /// Calculate emissions for `package`.
    ///
    /// The only hard failure modes are a missing origin/destination and
    /// invalid weight/dimension data; geocoding and classification always
    /// degrade to policy defaults instead of failing.
    pub fn calculate(&self, package: &PackageInfo) -> CalcResult<EmissionResult> {
        // ── 1. Weight resolution ──────────────────────────────────────────
        let resolved = resolve_weight(
            package.weight_kg,
            package.dimensions,
            package.carrier,
            &self.divisors,
        )?;

        // ── 2. Address precondition ───────────────────────────────────────
        let (origin, destination) = match (&package.origin, &package.destination) {
            (Some(o), Some(d)) => (o, d),
            (o, d) => {
                let end = match (o, d) {
                    (None, None) => "origin and destination",
                    (None, _)    => "origin",
                    _            => "destination",
                };
                return Err(CalcError::MissingAddress {
                    tracking_number: package.tracking_number.clone(),
                    end,
                });
            }
        };

        // ── 3. Distance ───────────────────────────────────────────────────
        let distance_km = self
            .distance
            .estimate(origin, destination, package.service_hint());

        // ── 4. Transport mode ─────────────────────────────────────────────
        let mode = self
            .services
            .classify(package.carrier, package.service_code.as_deref().unwrap_or(""));

        // ── 5. Main transit segment ───────────────────────────────────────
        let factor = self.factor(mode)?;
        let main = self.segment(SegmentKind::MainTransit, mode, distance_km, resolved.weight_kg, factor);

        // ── 6. Last-mile segment ──────────────────────────────────────────
        //
        // Line-haul transport hands off to a local delivery leg with its own,
        // typically higher, per-tonne-km footprint.  A shipment already
        // classified as last-mile has no additional leg.
        let mut segments = vec![main];
        if !mode.is_last_mile() {
            let last_mode = TransportMode::LastMileStandard;
            segments.push(self.segment(
                SegmentKind::LastMileDelivery,
                last_mode,
                self.distance.defaults().last_mile_km,
                resolved.weight_kg,
                self.factor(last_mode)?,
            ));
        }

        // ── 7. Aggregate ──────────────────────────────────────────────────
        let total_emissions_kg = segments.iter().map(|s| s.emissions_kg).sum();

        Ok(EmissionResult {
            total_emissions_kg,
            weight_used_kg: resolved.weight_kg,
            used_dimensional: resolved.used_dimensional,
            distance_km,
            transport_mode: mode,
            emission_factor: factor,
            segments,
            package: package.clone(),
        })
    }

    /// Price one leg.  Weight converts to tonnes before multiplying:
    /// tonnes × km × factor, no rounding.
    fn segment(
        &self,
        kind:        SegmentKind,
        mode:        TransportMode,
        distance_km: f64,
        weight_kg:   f64,
        factor:      f64,
    ) -> EmissionSegment {
        let emissions_kg = (weight_kg / 1000.0) * distance_km * factor;
        EmissionSegment { kind, mode, distance_km, weight_kg, factor, emissions_kg }
    }

    fn factor(&self, mode: TransportMode) -> CalcResult<f64> {
        self.factors.get(mode).ok_or(CalcError::MissingFactor(mode))
    }

    /// The distance estimator (diagnostic/test hook into the geocode cache).
    pub fn distance_estimator(&self) -> &DistanceEstimator<P> {
        &self.distance
    }
}

//! Validated construction of an [`EmissionsCalculator`].

use gb_carrier::ServiceCatalog;
use gb_geo::geocoder::GeocodeProvider;
use gb_geo::{DistanceDefaults, DistanceEstimator, RetryPolicy};

use crate::weight::DimensionalDivisors;
use crate::{CalcError, CalcResult, EmissionFactors, EmissionsCalculator};

/// Fluent builder for [`EmissionsCalculator<P>`].
///
/// # Required inputs
///
/// - `P: GeocodeProvider` — the geocoding backend
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                        |
/// |----------------|--------------------------------|
/// | `.retry(p)`    | `RetryPolicy::standard()`      |
/// | `.defaults(d)` | `DistanceDefaults::default()`  |
/// | `.factors(f)`  | `EmissionFactors::standard()`  |
/// | `.divisors(d)` | `DimensionalDivisors::standard()` |
/// | `.services(c)` | `ServiceCatalog::standard()`   |
///
/// `build` validates every configuration surface once — an incomplete factor
/// table, a non-positive distance default or divisor, or a carrier without a
/// service table is rejected here, before any calculation request is
/// accepted.
///
/// # Example
///
/// ```rust,ignore
/// let calculator = CalculatorBuilder::new(NominatimProvider::new("my-app/1.0")?)
///     .retry(RetryPolicy::standard())
///     .build()?;
/// let result = calculator.calculate(&package)?;
/// ```
pub struct CalculatorBuilder<P: GeocodeProvider> {
    provider: P,
    retry:    RetryPolicy,
    defaults: DistanceDefaults,
    factors:  EmissionFactors,
    divisors: DimensionalDivisors,
    services: ServiceCatalog,
}

impl<P: GeocodeProvider> CalculatorBuilder<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            retry:    RetryPolicy::standard(),
            defaults: DistanceDefaults::default(),
            factors:  EmissionFactors::standard(),
            divisors: DimensionalDivisors::standard(),
            services: ServiceCatalog::standard(),
        }
    }

    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn defaults(mut self, defaults: DistanceDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn factors(mut self, factors: EmissionFactors) -> Self {
        self.factors = factors;
        self
    }

    pub fn divisors(mut self, divisors: DimensionalDivisors) -> Self {
        self.divisors = divisors;
        self
    }

    pub fn services(mut self, services: ServiceCatalog) -> Self {
        self.services = services;
        self
    }

    /// Validate all configuration and return a ready calculator.
    pub fn build(self) -> CalcResult<EmissionsCalculator<P>> {
        self.factors
            .validate()
            .map_err(|e| CalcError::Config(e.to_string()))?;
        self.defaults
            .validate()
            .map_err(|e| CalcError::Config(e.to_string()))?;
        self.divisors
            .validate()
            .map_err(CalcError::Config)?;
        self.services
            .validate()
            .map_err(|e| CalcError::Config(e.to_string()))?;

        Ok(EmissionsCalculator {
            distance: DistanceEstimator::new(self.provider, self.retry, self.defaults),
            factors:  self.factors,
            divisors: self.divisors,
            services: self.services,
        })
    }
}

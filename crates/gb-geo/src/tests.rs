//! Unit tests for geocoding and distance estimation.

use std::sync::atomic::{AtomicUsize, Ordering};

use gb_core::{Address, GeoPoint};

use crate::geocoder::{GeocodeProvider, Geocoder, StaticProvider};
use crate::{DistanceDefaults, DistanceEstimator, GeoError, RetryPolicy};

// ── Test doubles ──────────────────────────────────────────────────────────────

/// Wraps a provider and counts lookups.
struct Counting<P> {
    inner: P,
    calls: AtomicUsize,
}

impl<P> Counting<P> {
    fn new(inner: P) -> Self {
        Self { inner, calls: AtomicUsize::new(0) }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<P: GeocodeProvider> GeocodeProvider for Counting<P> {
    fn lookup(&self, query: &str) -> Result<Option<GeoPoint>, GeoError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.lookup(query)
    }
}

/// Fails with a transient error on every lookup.
struct AlwaysDown;

impl GeocodeProvider for AlwaysDown {
    fn lookup(&self, _query: &str) -> Result<Option<GeoPoint>, GeoError> {
        Err(GeoError::Timeout)
    }
}

/// Fails transiently `failures` times, then serves from the inner table.
struct FlakyProvider {
    inner:    StaticProvider,
    failures: AtomicUsize,
}

impl GeocodeProvider for FlakyProvider {
    fn lookup(&self, query: &str) -> Result<Option<GeoPoint>, GeoError> {
        if self.failures.load(Ordering::SeqCst) > 0 {
            self.failures.fetch_sub(1, Ordering::SeqCst);
            return Err(GeoError::Service("503".into()));
        }
        self.inner.lookup(query)
    }
}

fn worcester() -> Address {
    Address {
        city:        Some("Worcester".into()),
        state:       Some("MA".into()),
        postal_code: Some("01609".into()),
        country:     Some("US".into()),
        ..Address::default()
    }
}

const WORCESTER: GeoPoint = GeoPoint { lat: 42.2626, lon: -71.8023 };

// ── Geocoder ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod geocoder_tests {
    use super::*;

    #[test]
    fn coords_short_circuit_bypasses_provider() {
        let counting = Counting::new(StaticProvider::new());
        let geocoder = Geocoder::new(&counting, RetryPolicy::immediate(3));

        let addr = Address { coords: Some(WORCESTER), ..worcester() };
        assert_eq!(geocoder.resolve(&addr), Some(WORCESTER));
        assert_eq!(counting.calls(), 0);
    }

    #[test]
    fn cache_hit_skips_provider() {
        let addr = worcester();
        let counting = Counting::new(StaticProvider::new().with(addr.query_string(), WORCESTER));
        let geocoder = Geocoder::new(&counting, RetryPolicy::immediate(3));

        assert_eq!(geocoder.resolve(&addr), Some(WORCESTER));
        let after_first = counting.calls();
        assert_eq!(geocoder.resolve(&addr), Some(WORCESTER));
        assert_eq!(counting.calls(), after_first);
        assert_eq!(geocoder.cache_len(), 1);
    }

    #[test]
    fn city_country_fallback() {
        // Full query misses; "city, country" hits.
        let provider = StaticProvider::new().with("Worcester, US", WORCESTER);
        let geocoder = Geocoder::new(provider, RetryPolicy::immediate(3));
        assert_eq!(geocoder.resolve(&worcester()), Some(WORCESTER));
    }

    #[test]
    fn postal_country_fallback() {
        // Full query and city+country miss; "postal, country" hits.
        let provider = StaticProvider::new().with("01609, US", WORCESTER);
        let geocoder = Geocoder::new(provider, RetryPolicy::immediate(3));
        assert_eq!(geocoder.resolve(&worcester()), Some(WORCESTER));
    }

    #[test]
    fn fallback_hit_cached_under_full_query() {
        let addr = worcester();
        let counting = Counting::new(StaticProvider::new().with("Worcester, US", WORCESTER));
        let geocoder = Geocoder::new(&counting, RetryPolicy::immediate(3));

        assert_eq!(geocoder.resolve(&addr), Some(WORCESTER));
        let after_first = counting.calls();
        // Second resolve must be a cache hit on the *full* query string.
        assert_eq!(geocoder.resolve(&addr), Some(WORCESTER));
        assert_eq!(counting.calls(), after_first);
    }

    #[test]
    fn definitive_miss_does_not_retry() {
        let counting = Counting::new(StaticProvider::new());
        let geocoder = Geocoder::new(&counting, RetryPolicy::immediate(3));

        assert_eq!(geocoder.resolve(&worcester()), None);
        // One pass over the 3-step ladder, no retries.
        assert_eq!(counting.calls(), 3);
    }

    #[test]
    fn transient_errors_exhaust_budget_then_none() {
        let counting = Counting::new(AlwaysDown);
        let geocoder = Geocoder::new(&counting, RetryPolicy::immediate(3));

        assert_eq!(geocoder.resolve(&worcester()), None);
        // Each attempt aborts on the first ladder step's error.
        assert_eq!(counting.calls(), 3);
    }

    #[test]
    fn recovers_after_transient_failures() {
        let addr = worcester();
        let flaky = FlakyProvider {
            inner:    StaticProvider::new().with(addr.query_string(), WORCESTER),
            failures: AtomicUsize::new(2),
        };
        let geocoder = Geocoder::new(flaky, RetryPolicy::immediate(3));
        assert_eq!(geocoder.resolve(&addr), Some(WORCESTER));
    }

    #[test]
    fn empty_address_is_none_without_lookup() {
        let counting = Counting::new(StaticProvider::new());
        let geocoder = Geocoder::new(&counting, RetryPolicy::immediate(3));
        assert_eq!(geocoder.resolve(&Address::default()), None);
        assert_eq!(counting.calls(), 0);
    }
}

// ── DistanceEstimator ─────────────────────────────────────────────────────────

#[cfg(test)]
mod distance_tests {
    use super::*;

    const LONDON: GeoPoint = GeoPoint { lat: 51.5074, lon: -0.1278 };

    fn uk_address() -> Address {
        Address {
            city:    Some("London".into()),
            country: Some("GB".into()),
            ..Address::default()
        }
    }

    fn offline_estimator() -> DistanceEstimator<StaticProvider> {
        DistanceEstimator::new(
            StaticProvider::new(),
            RetryPolicy::immediate(1),
            DistanceDefaults::default(),
        )
    }

    #[test]
    fn geocoded_pair_uses_great_circle() {
        let origin = worcester();
        let dest = uk_address();
        let provider = StaticProvider::new()
            .with(origin.query_string(), WORCESTER)
            .with(dest.query_string(), LONDON);
        let est = DistanceEstimator::new(
            provider,
            RetryPolicy::immediate(1),
            DistanceDefaults::default(),
        );

        let km = est.estimate(&origin, &dest, "ground");
        let expected = WORCESTER.distance_km(LONDON);
        assert!((km - expected).abs() < 1e-9, "got {km}, expected {expected}");
    }

    #[test]
    fn differing_countries_default_international() {
        let km = offline_estimator().estimate(&worcester(), &uk_address(), "ground");
        assert_eq!(km, 5_000.0);
    }

    #[test]
    fn air_hint_defaults_domestic_air() {
        let km = offline_estimator().estimate(&worcester(), &worcester(), "Next Day Air");
        assert_eq!(km, 1_500.0);
    }

    #[test]
    fn ground_default_otherwise() {
        let km = offline_estimator().estimate(&worcester(), &worcester(), "Ground");
        assert_eq!(km, 1_200.0);
    }

    #[test]
    fn missing_addresses_fall_through_to_defaults() {
        let km = offline_estimator().estimate(&Address::default(), &Address::default(), "ground");
        assert_eq!(km, 1_200.0);
    }

    #[test]
    fn same_country_case_insensitive() {
        let mut dest = worcester();
        dest.country = Some("us".into());
        // Same country (case-insensitively) → domestic, not international.
        let km = offline_estimator().estimate(&worcester(), &dest, "ground");
        assert_eq!(km, 1_200.0);
    }

    #[test]
    fn one_resolvable_end_still_uses_defaults() {
        let origin = worcester();
        let provider = StaticProvider::new().with(origin.query_string(), WORCESTER);
        let est = DistanceEstimator::new(
            provider,
            RetryPolicy::immediate(1),
            DistanceDefaults::default(),
        );
        // Destination never geocodes → policy default, not a crash.
        let km = est.estimate(&origin, &worcester_with_unknown_city(), "ground");
        assert_eq!(km, 1_200.0);
    }

    fn worcester_with_unknown_city() -> Address {
        Address {
            city:    Some("Nowhereville".into()),
            country: Some("US".into()),
            ..Address::default()
        }
    }

    #[test]
    fn defaults_validate_rejects_nonpositive() {
        let mut defaults = DistanceDefaults::default();
        assert!(defaults.validate().is_ok());
        defaults.last_mile_km = 0.0;
        assert!(defaults.validate().is_err());
    }
}

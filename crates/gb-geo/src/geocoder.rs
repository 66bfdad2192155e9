//! Address resolution with caching and tiered fallback queries.
//!
//! # Pluggability
//!
//! All lookups go through the [`GeocodeProvider`] trait, so applications can
//! swap the HTTP Nominatim provider for a local index or a test table
//! without touching the resolution policy.  The policy itself — coordinate
//! short-circuit, per-run cache, fallback ladder, bounded retry — lives in
//! [`Geocoder`] and is identical for every provider.
//!
//! # Concurrency
//!
//! The cache is a single mutex-guarded map.  Batch workers share one
//! `Geocoder`; concurrent misses for the same address may each call the
//! provider, and the last writer wins.  That duplication is accepted —
//! geocoding results for the same query string are interchangeable.

use std::sync::{Mutex, MutexGuard, PoisonError};

use gb_core::{Address, GeoPoint};

use crate::{GeoError, RetryPolicy};

#[cfg(feature = "fx-hash")]
type CacheMap = rustc_hash::FxHashMap<String, GeoPoint>;
#[cfg(not(feature = "fx-hash"))]
type CacheMap = std::collections::HashMap<String, GeoPoint>;

// ── Provider trait ────────────────────────────────────────────────────────────

/// A single free-text geocoding lookup.
///
/// `Ok(None)` is a definitive "no match"; `Err` with a transient error
/// ([`GeoError::is_transient`]) makes the geocoder retry the whole fallback
/// sequence.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one provider can serve all batch
/// workers.
pub trait GeocodeProvider: Send + Sync {
    fn lookup(&self, query: &str) -> Result<Option<GeoPoint>, GeoError>;
}

/// A shared reference to a provider is itself a provider, so one instance
/// can back several estimators (or be observed from a test).
impl<P: GeocodeProvider + ?Sized> GeocodeProvider for &P {
    fn lookup(&self, query: &str) -> Result<Option<GeoPoint>, GeoError> {
        (**self).lookup(query)
    }
}

// ── Geocoder ──────────────────────────────────────────────────────────────────

/// Resolves an [`Address`] to coordinates through a [`GeocodeProvider`],
/// with a per-run cache and a bounded retry budget.
#[derive(Debug)]
pub struct Geocoder<P: GeocodeProvider> {
    provider: P,
    retry:    RetryPolicy,
    cache:    Mutex<CacheMap>,
}

impl<P: GeocodeProvider> Geocoder<P> {
    pub fn new(provider: P, retry: RetryPolicy) -> Self {
        Self {
            provider,
            retry,
            cache: Mutex::new(CacheMap::default()),
        }
    }

    /// Resolve `address` to coordinates, or `None` if it cannot be geocoded.
    ///
    /// Resolution order:
    /// 1. Coordinates already on the address — returned as-is, bypassing
    ///    cache and provider.  This is a contract, not an optimization: a
    ///    carrier-supplied fix must never be re-resolved.
    /// 2. Cache hit on the exact query string.
    /// 3. Provider lookups: the full query string, then "city, country",
    ///    then "postal_code, country" (fallbacks only when both parts are
    ///    present).  The first match is cached under the *full* query string
    ///    and returned.
    ///
    /// A definitive miss on all three queries returns `None` immediately.
    /// Transient provider errors re-run the whole sequence after
    /// `RetryPolicy::delay`, up to `max_attempts`; an exhausted budget also
    /// returns `None`.  No path returns an error — geocoding failure is
    /// always survivable.
    pub fn resolve(&self, address: &Address) -> Option<GeoPoint> {
        if let Some(coords) = address.coords {
            return Some(coords);
        }

        let key = address.query_string();
        if key.is_empty() {
            return None;
        }
        if let Some(&hit) = self.cache_guard().get(&key) {
            return Some(hit);
        }

        for attempt in 1..=self.retry.max_attempts {
            match self.try_fallback_sequence(address, &key) {
                Ok(found) => {
                    if let Some(coords) = found {
                        self.cache_guard().insert(key, coords);
                        log::debug!("geocoded {} -> {coords}", address.label());
                        return Some(coords);
                    }
                    log::warn!("could not geocode: {key}");
                    return None;
                }
                Err(e) if attempt < self.retry.max_attempts => {
                    log::warn!("geocoding attempt {attempt} failed ({e}), retrying");
                    std::thread::sleep(self.retry.delay);
                }
                Err(e) => {
                    log::warn!(
                        "geocoding failed after {} attempts: {e}",
                        self.retry.max_attempts
                    );
                    return None;
                }
            }
        }
        None
    }

    /// One pass over the three-step query ladder.  A transient error at any
    /// step aborts the pass so the retry loop can re-run it whole.
    fn try_fallback_sequence(
        &self,
        address: &Address,
        full_query: &str,
    ) -> Result<Option<GeoPoint>, GeoError> {
        if let Some(coords) = self.provider.lookup(full_query)? {
            return Ok(Some(coords));
        }

        if let (Some(city), Some(country)) = (address.city.as_deref(), address.country()) {
            if !city.is_empty() {
                let fallback = format!("{city}, {country}");
                log::debug!("trying city+country: {fallback}");
                if let Some(coords) = self.provider.lookup(&fallback)? {
                    return Ok(Some(coords));
                }
            }
        }

        if let (Some(postal), Some(country)) = (address.postal_code.as_deref(), address.country()) {
            if !postal.is_empty() {
                let fallback = format!("{postal}, {country}");
                log::debug!("trying postal+country: {fallback}");
                if let Some(coords) = self.provider.lookup(&fallback)? {
                    return Ok(Some(coords));
                }
            }
        }

        Ok(None)
    }

    /// Number of cached query strings (test/diagnostic hook).
    pub fn cache_len(&self) -> usize {
        self.cache_guard().len()
    }

    /// Cached coordinates only ever move the map toward a fuller state, so a
    /// poisoned lock is still safe to reuse.
    fn cache_guard(&self) -> MutexGuard<'_, CacheMap> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ── StaticProvider ────────────────────────────────────────────────────────────

/// Table-backed provider for tests and offline demos.
///
/// Queries absent from the table are definitive misses.
#[derive(Debug, Default)]
pub struct StaticProvider {
    entries: Vec<(String, GeoPoint)>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query → coordinates entry (builder style).
    pub fn with(mut self, query: impl Into<String>, coords: GeoPoint) -> Self {
        self.entries.push((query.into(), coords));
        self
    }
}

impl GeocodeProvider for StaticProvider {
    fn lookup(&self, query: &str) -> Result<Option<GeoPoint>, GeoError> {
        Ok(self
            .entries
            .iter()
            .find(|(q, _)| q == query)
            .map(|&(_, coords)| coords))
    }
}

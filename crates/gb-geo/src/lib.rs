//! `gb-geo` — address geocoding and distance estimation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`geocoder`] | `GeocodeProvider` trait, `Geocoder` (cache + fallbacks), `StaticProvider` |
//! | [`retry`]    | `RetryPolicy` (bounded attempts, fixed delay)              |
//! | [`distance`] | `DistanceEstimator`, `DistanceDefaults`                    |
//! | [`nominatim`]| `NominatimProvider` (feature = `"nominatim"` only)         |
//! | [`error`]    | `GeoError`, `GeoResult<T>`                                 |
//!
//! # Feature flags
//!
//! | Flag        | Effect                                                      |
//! |-------------|-------------------------------------------------------------|
//! | `nominatim` | Enables the HTTP provider via the `reqwest` crate.          |
//! | `fx-hash`   | Uses `FxHashMap` for the geocode cache (faster string keys).|
//! | `serde`     | Propagates serde derives to `gb-core` types.                |
//!
//! Geocoding failure is never fatal: the distance estimator degrades to a
//! fixed default-distance policy, so a package with unresolvable addresses
//! still gets an emissions estimate.

pub mod distance;
pub mod error;
pub mod geocoder;
pub mod retry;

#[cfg(feature = "nominatim")]
pub mod nominatim;

#[cfg(test)]
mod tests;

pub use distance::{DistanceDefaults, DistanceEstimator};
pub use error::{GeoError, GeoResult};
pub use geocoder::{GeocodeProvider, Geocoder, StaticProvider};
pub use retry::RetryPolicy;

#[cfg(feature = "nominatim")]
pub use nominatim::NominatimProvider;

//! Normalized postal address.
//!
//! Carrier adapters build an `Address` from whatever shape their tracking
//! API returns; the rest of the system only ever sees this one type.
//! Immutable once built and owned by the `PackageInfo` that references it.

use crate::GeoPoint;

/// A postal address with optional pre-resolved coordinates.
///
/// If `coords` is present the geocoder returns it unchanged — pre-resolved
/// coordinates always take precedence over re-geocoding.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    pub street:      Option<String>,
    pub city:        Option<String>,
    pub state:       Option<String>,
    pub postal_code: Option<String>,
    pub country:     Option<String>,
    pub coords:      Option<GeoPoint>,
}

impl Address {
    /// Free-text geocoding query: non-empty fields in the fixed order
    /// street, city, state, postal code, country, joined with ", ".
    ///
    /// This exact string is also the geocode cache key, so the field order
    /// must stay stable.
    pub fn query_string(&self) -> String {
        [
            &self.street,
            &self.city,
            &self.state,
            &self.postal_code,
            &self.country,
        ]
        .into_iter()
        .filter_map(|f| f.as_deref())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }

    /// The country field, empty-trimmed to `None`.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref().filter(|s| !s.is_empty())
    }

    /// A short label for log lines: city if present, else postal code,
    /// else the full query string.
    pub fn label(&self) -> String {
        self.city
            .clone()
            .or_else(|| self.postal_code.clone())
            .unwrap_or_else(|| self.query_string())
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.query_string())
    }
}

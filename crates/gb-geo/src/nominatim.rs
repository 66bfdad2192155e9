//! Nominatim HTTP provider (feature `nominatim`).
//!
//! Free-text search against a Nominatim instance (by default the public
//! OpenStreetMap one).  Nominatim's usage policy requires an identifying
//! User-Agent, so construction takes one rather than defaulting it.

use std::time::Duration;

use gb_core::GeoPoint;

use crate::geocoder::GeocodeProvider;
use crate::GeoError;

const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Geocoding via a Nominatim `/search` endpoint.
pub struct NominatimProvider {
    client:   reqwest::blocking::Client,
    endpoint: String,
}

impl NominatimProvider {
    /// Provider against the public OSM instance with a 10 s timeout.
    pub fn new(user_agent: &str) -> Result<Self, GeoError> {
        Self::with_endpoint(user_agent, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }

    /// Provider against a self-hosted or mock instance.
    pub fn with_endpoint(
        user_agent: &str,
        endpoint: &str,
        timeout: Duration,
    ) -> Result<Self, GeoError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| GeoError::Service(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }
}

impl GeocodeProvider for NominatimProvider {
    fn lookup(&self, query: &str) -> Result<Option<GeoPoint>, GeoError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    GeoError::Timeout
                } else {
                    GeoError::Service(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeoError::Service(format!("nominatim returned {status}")));
        }

        let body: serde_json::Value = response
            .json()
            .map_err(|e| GeoError::Service(e.to_string()))?;

        // Response is an array of matches; lat/lon are decimal strings.
        let Some(first) = body.as_array().and_then(|a| a.first()) else {
            return Ok(None);
        };
        let lat = parse_coord(first, "lat")?;
        let lon = parse_coord(first, "lon")?;
        Ok(Some(GeoPoint::new(lat, lon)))
    }
}

fn parse_coord(entry: &serde_json::Value, field: &str) -> Result<f64, GeoError> {
    entry
        .get(field)
        .and_then(|v| v.as_str())
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| GeoError::Service(format!("malformed nominatim response: missing {field}")))
}

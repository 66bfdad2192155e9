//! UPS adapter: service table, tracking payload normalization, live API.
//!
//! # Payload casing
//!
//! The UPS Track API has shipped both `trackResponse`-style (camelCase) and
//! `TrackResponse`-style (PascalCase) payloads depending on API version.
//! Rather than probing both spellings at every access, the raw shape is
//! declared once with serde aliases and the rest of the adapter works on the
//! typed result — carrier quirks stop at this boundary.

use gb_core::units::lb_to_kg;
use gb_core::{Address, CarrierId, PackageInfo, TransportMode};
use serde::Deserialize;

use crate::adapter::CarrierAdapter;
use crate::catalog::ServiceMap;
use crate::{CarrierError, CarrierResult};

/// UPS service codes as issued (positional, case-sensitive).
pub fn service_map() -> ServiceMap {
    ServiceMap::new(CarrierId::Ups, TransportMode::GroundStandard)
        .with("01", TransportMode::AirNextDay)
        .with("02", TransportMode::AirTwoDay)
        .with("03", TransportMode::GroundStandard)
        .with("07", TransportMode::AirIntlExpress)
        .with("08", TransportMode::AirIntlExpedited)
        .with("11", TransportMode::GroundStandard)
        .with("12", TransportMode::AirThreeDay)
        .with("13", TransportMode::AirNextDaySaver)
        .with("14", TransportMode::AirNextDayEarly)
        .with("54", TransportMode::AirIntlExpress)
        .with("59", TransportMode::AirTwoDayEarly)
        .with("65", TransportMode::AirIntlSaver)
        .with("70", TransportMode::FreightLtl)
        .with("74", TransportMode::GroundEconomy)
        .with("82", TransportMode::GroundEconomy)
        .with("83", TransportMode::GroundEconomy)
        .with("93", TransportMode::SurePost)
        .with("M2", TransportMode::MailInnovations)
        .with("M3", TransportMode::MailInnovations)
        .with("M4", TransportMode::MailInnovations)
        .with("M5", TransportMode::MailInnovations)
        .with("M6", TransportMode::MailInnovations)
}

/// UPS integration.
pub struct UpsAdapter {
    services: ServiceMap,
    /// Production endpoints vs. the CIE (customer integration) environment.
    production: bool,
}

impl UpsAdapter {
    pub fn new(production: bool) -> Self {
        Self {
            services: service_map(),
            production,
        }
    }

    /// Whether the adapter targets the production API environment.
    pub fn is_production(&self) -> bool {
        self.production
    }

    #[cfg(feature = "http")]
    fn base_url(&self) -> &'static str {
        if self.production {
            "https://onlinetools.ups.com"
        } else {
            "https://wwwcie.ups.com"
        }
    }
}

impl CarrierAdapter for UpsAdapter {
    fn carrier(&self) -> CarrierId {
        CarrierId::Ups
    }

    fn classify_mode(&self, service_code: &str) -> TransportMode {
        self.services.classify(service_code)
    }

    fn parse_tracking(&self, payload: &serde_json::Value) -> CarrierResult<PackageInfo> {
        let parsed: TrackPayload = serde_json::from_value(payload.clone())?;
        let package = parsed
            .track_response
            .shipment
            .first()
            .and_then(|s| s.package.first())
            .ok_or_else(|| CarrierError::Parse("no shipment/package in track response".into()))?;

        let weight_kg = package
            .weight
            .as_ref()
            .and_then(RawWeight::to_kg)
            .ok_or_else(|| CarrierError::Parse("package weight missing or unparseable".into()))?;
        if weight_kg < 0.0 {
            return Err(CarrierError::Parse(format!("negative package weight {weight_kg}")));
        }

        let mut origin = None;
        let mut destination = None;
        for entry in &package.addresses {
            let Some(raw) = &entry.address else { continue };
            let parsed_addr = raw.to_address();
            match entry.kind.as_deref().map(str::to_ascii_lowercase).as_deref() {
                Some("origin") => origin = Some(parsed_addr),
                Some("destination") => destination = Some(parsed_addr),
                _ => {}
            }
        }

        let service = package.service.clone().unwrap_or_default();
        let tracking_number = package
            .tracking_number
            .clone()
            .ok_or_else(|| CarrierError::Parse("tracking number missing".into()))?;

        log::debug!("parsed UPS package {tracking_number}: {weight_kg:.2} kg");

        let mut pkg = PackageInfo::new(tracking_number, weight_kg, CarrierId::Ups);
        pkg.origin = origin;
        pkg.destination = destination;
        pkg.service_code = Some(service.code.unwrap_or_else(|| "03".into()));
        pkg.service_description = Some(service.description.unwrap_or_else(|| "Ground".into()));
        Ok(pkg)
    }

    /// OAuth2 client-credentials flow against the UPS security endpoint.
    #[cfg(feature = "http")]
    fn authenticate(&self, credentials: &Credentials) -> CarrierResult<String> {
        #[derive(Deserialize)]
        struct TokenResponse {
            access_token: String,
        }

        let url = format!("{}/security/v1/oauth/token", self.base_url());
        let response = reqwest::blocking::Client::new()
            .post(url)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()?
            .error_for_status()
            .map_err(|e| CarrierError::Auth(CarrierId::Ups, e.to_string()))?;

        let token: TokenResponse = response.json()?;
        log::debug!("UPS authentication succeeded");
        Ok(token.access_token)
    }

    #[cfg(feature = "http")]
    fn fetch_tracking(&self, token: &str, tracking_number: &str) -> CarrierResult<serde_json::Value> {
        let url = format!("{}/api/track/v1/details/{tracking_number}", self.base_url());
        let response = reqwest::blocking::Client::new()
            .get(url)
            .bearer_auth(token)
            .header("transId", trans_id())
            .header("transactionSrc", "rust_greenboard")
            .send()?
            .error_for_status()?;
        log::debug!("retrieved UPS tracking data for {tracking_number}");
        Ok(response.json()?)
    }
}

#[cfg(feature = "http")]
use crate::adapter::Credentials;

/// Per-request transaction id required by the Track API.
#[cfg(feature = "http")]
fn trans_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    format!("gb-{nanos:x}")
}

// ── Raw payload shape ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TrackPayload {
    #[serde(alias = "trackResponse", alias = "TrackResponse")]
    track_response: TrackResponse,
}

#[derive(Deserialize)]
struct TrackResponse {
    #[serde(alias = "shipment", alias = "Shipment")]
    shipment: Vec<RawShipment>,
}

#[derive(Deserialize)]
struct RawShipment {
    #[serde(alias = "package", alias = "Package")]
    package: Vec<RawPackage>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawPackage {
    #[serde(alias = "trackingNumber", alias = "TrackingNumber")]
    tracking_number: Option<String>,

    #[serde(alias = "packageWeight", alias = "PackageWeight")]
    weight: Option<RawWeight>,

    #[serde(alias = "packageAddress", alias = "Packageaddress")]
    addresses: Vec<RawPackageAddress>,

    #[serde(alias = "service", alias = "Service")]
    service: Option<RawService>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawWeight {
    #[serde(alias = "unitOfMeasurement", alias = "UnitOfMeasurement")]
    unit: Option<String>,

    #[serde(alias = "weight", alias = "Weight")]
    value: Option<serde_json::Value>,
}

impl RawWeight {
    /// Weight in kg; the API reports the scalar as either a JSON number or a
    /// decimal string depending on version.
    fn to_kg(&self) -> Option<f64> {
        let value = match self.value.as_ref()? {
            serde_json::Value::Number(n) => n.as_f64()?,
            serde_json::Value::String(s) => s.trim().parse().ok()?,
            _ => return None,
        };
        match self.unit.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("lbs") => Some(lb_to_kg(value)),
            Some("kgs") => Some(value),
            _ => None,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawPackageAddress {
    #[serde(alias = "type", alias = "Type")]
    kind: Option<String>,

    #[serde(alias = "address", alias = "Address")]
    address: Option<RawAddress>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawAddress {
    #[serde(alias = "addressLine", alias = "AddressLine")]
    street: Option<String>,
    #[serde(alias = "city", alias = "City")]
    city: Option<String>,
    #[serde(alias = "stateProvince", alias = "StateProvince")]
    state: Option<String>,
    #[serde(alias = "postalCode", alias = "PostalCode")]
    postal_code: Option<String>,
    #[serde(alias = "country", alias = "Country")]
    country: Option<String>,
}

impl RawAddress {
    fn to_address(&self) -> Address {
        Address {
            street:      self.street.clone(),
            city:        self.city.clone(),
            state:       self.state.clone(),
            postal_code: self.postal_code.clone(),
            // UPS omits the country on purely domestic legs.
            country:     Some(self.country.clone().unwrap_or_else(|| "US".into())),
            coords:      None,
        }
    }
}

#[derive(Deserialize, Default, Clone)]
#[serde(default)]
struct RawService {
    #[serde(alias = "code", alias = "Code")]
    code: Option<String>,
    #[serde(alias = "description", alias = "Description")]
    description: Option<String>,
}

//! USPS adapter.
//!
//! Classification is fully wired; the live Track API integration is not
//! (records arrive pre-normalized from the import pipeline).

use gb_core::{CarrierId, PackageInfo, TransportMode};

use crate::adapter::{parse_normalized, CarrierAdapter};
use crate::catalog::ServiceMap;
use crate::CarrierResult;

/// USPS mail classes, upper-cased before lookup.
pub fn service_map() -> ServiceMap {
    ServiceMap::new(CarrierId::Usps, TransportMode::GroundStandard)
        .with("PRIORITY", TransportMode::AirTwoDay)
        .with("PRIORITY_EXPRESS", TransportMode::AirNextDay)
        .with("FIRST_CLASS", TransportMode::GroundStandard)
        .with("PARCEL_SELECT", TransportMode::GroundEconomy)
        .with("MEDIA_MAIL", TransportMode::GroundEconomy)
        .with("PRIORITY_MAIL_EXPRESS_INTERNATIONAL", TransportMode::AirIntlExpress)
        .with("PRIORITY_MAIL_INTERNATIONAL", TransportMode::AirIntlExpedited)
        .with("FIRST_CLASS_PACKAGE_INTERNATIONAL", TransportMode::GroundStandard)
}

pub struct UspsAdapter {
    services: ServiceMap,
}

impl UspsAdapter {
    pub fn new() -> Self {
        Self { services: service_map() }
    }
}

impl CarrierAdapter for UspsAdapter {
    fn carrier(&self) -> CarrierId {
        CarrierId::Usps
    }

    fn classify_mode(&self, service_code: &str) -> TransportMode {
        self.services.classify(service_code)
    }

    fn parse_tracking(&self, payload: &serde_json::Value) -> CarrierResult<PackageInfo> {
        parse_normalized(CarrierId::Usps, payload)
    }
}

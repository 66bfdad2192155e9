//! DHL adapter.
//!
//! Classification is fully wired; the live Track API integration is not
//! (records arrive pre-normalized from the import pipeline).

use gb_core::{CarrierId, PackageInfo, TransportMode};

use crate::adapter::{parse_normalized, CarrierAdapter};
use crate::catalog::ServiceMap;
use crate::CarrierResult;

/// DHL express products, upper-cased before lookup.
pub fn service_map() -> ServiceMap {
    ServiceMap::new(CarrierId::Dhl, TransportMode::GroundStandard)
        .with("EXPRESS_WORLDWIDE", TransportMode::AirIntlExpress)
        .with("EXPRESS_12:00", TransportMode::AirIntlExpress)
        .with("EXPRESS_9:00", TransportMode::AirIntlExpress)
        .with("EXPRESS_EASY", TransportMode::AirIntlExpedited)
        .with("ECONOMY_SELECT", TransportMode::AirIntlSaver)
        .with("GROUND", TransportMode::GroundStandard)
}

pub struct DhlAdapter {
    services: ServiceMap,
}

impl DhlAdapter {
    pub fn new() -> Self {
        Self { services: service_map() }
    }
}

impl CarrierAdapter for DhlAdapter {
    fn carrier(&self) -> CarrierId {
        CarrierId::Dhl
    }

    fn classify_mode(&self, service_code: &str) -> TransportMode {
        self.services.classify(service_code)
    }

    fn parse_tracking(&self, payload: &serde_json::Value) -> CarrierResult<PackageInfo> {
        parse_normalized(CarrierId::Dhl, payload)
    }
}

//! FedEx adapter.
//!
//! Classification is fully wired; the live Track API integration is not
//! (records arrive pre-normalized from the import pipeline).

use gb_core::{CarrierId, PackageInfo, TransportMode};

use crate::adapter::{parse_normalized, CarrierAdapter};
use crate::catalog::ServiceMap;
use crate::CarrierResult;

/// FedEx named services, upper-cased before lookup.
pub fn service_map() -> ServiceMap {
    ServiceMap::new(CarrierId::Fedex, TransportMode::GroundStandard)
        .with("FEDEX_GROUND", TransportMode::GroundStandard)
        .with("GROUND_HOME_DELIVERY", TransportMode::GroundStandard)
        .with("FEDEX_EXPRESS_SAVER", TransportMode::AirThreeDay)
        .with("FEDEX_2_DAY", TransportMode::AirTwoDay)
        .with("FEDEX_2_DAY_AM", TransportMode::AirTwoDayEarly)
        .with("STANDARD_OVERNIGHT", TransportMode::AirNextDay)
        .with("PRIORITY_OVERNIGHT", TransportMode::AirNextDayEarly)
        .with("FIRST_OVERNIGHT", TransportMode::AirNextDayEarly)
        .with("INTERNATIONAL_ECONOMY", TransportMode::AirIntlSaver)
        .with("INTERNATIONAL_PRIORITY", TransportMode::AirIntlExpress)
        .with("INTERNATIONAL_FIRST", TransportMode::AirIntlExpress)
        .with("FEDEX_FREIGHT_PRIORITY", TransportMode::FreightLtl)
        .with("FEDEX_FREIGHT_ECONOMY", TransportMode::FreightLtl)
        .with("FEDEX_FREIGHT", TransportMode::FreightFtl)
        .with("SMART_POST", TransportMode::MailInnovations)
}

pub struct FedexAdapter {
    services: ServiceMap,
}

impl FedexAdapter {
    pub fn new() -> Self {
        Self { services: service_map() }
    }
}

impl CarrierAdapter for FedexAdapter {
    fn carrier(&self) -> CarrierId {
        CarrierId::Fedex
    }

    fn classify_mode(&self, service_code: &str) -> TransportMode {
        self.services.classify(service_code)
    }

    fn parse_tracking(&self, payload: &serde_json::Value) -> CarrierResult<PackageInfo> {
        parse_normalized(CarrierId::Fedex, payload)
    }
}

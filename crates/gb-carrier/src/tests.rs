//! Unit tests for classification and payload normalization.

#[cfg(test)]
mod catalog {
    use gb_core::{CarrierId, TransportMode};

    use crate::catalog::{ServiceCatalog, ServiceMap};

    #[test]
    fn standard_catalog_validates() {
        let catalog = ServiceCatalog::standard();
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn missing_carrier_table_fails_validation() {
        let mut catalog = ServiceCatalog::new();
        catalog.insert(crate::ups::service_map());
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn ups_codes_are_case_sensitive() {
        let catalog = ServiceCatalog::standard();
        assert_eq!(
            catalog.classify(CarrierId::Ups, "M2"),
            TransportMode::MailInnovations
        );
        // Lower-case "m2" is not a UPS code as issued → default mode.
        assert_eq!(
            catalog.classify(CarrierId::Ups, "m2"),
            TransportMode::GroundStandard
        );
    }

    #[test]
    fn named_carrier_codes_are_upper_cased() {
        let catalog = ServiceCatalog::standard();
        assert_eq!(
            catalog.classify(CarrierId::Fedex, "fedex_2_day"),
            TransportMode::AirTwoDay
        );
        assert_eq!(
            catalog.classify(CarrierId::Usps, " priority "),
            TransportMode::AirTwoDay
        );
        assert_eq!(
            catalog.classify(CarrierId::Dhl, "express_worldwide"),
            TransportMode::AirIntlExpress
        );
    }

    #[test]
    fn unmapped_code_resolves_to_carrier_default() {
        let catalog = ServiceCatalog::standard();
        assert_eq!(
            catalog.classify(CarrierId::Ups, "99"),
            TransportMode::GroundStandard
        );
        assert_eq!(
            catalog.classify(CarrierId::Dhl, "PARCEL_CONNECT"),
            TransportMode::GroundStandard
        );
    }

    #[test]
    fn synthetic_map_uses_its_default() {
        let map = ServiceMap::new(CarrierId::Dhl, TransportMode::RailStandard)
            .with("X", TransportMode::OceanStandard);
        assert_eq!(map.classify("X"), TransportMode::OceanStandard);
        assert_eq!(map.classify("Y"), TransportMode::RailStandard);
    }

    #[test]
    fn representative_ups_rows() {
        let catalog = ServiceCatalog::standard();
        let expect = [
            ("01", TransportMode::AirNextDay),
            ("03", TransportMode::GroundStandard),
            ("07", TransportMode::AirIntlExpress),
            ("65", TransportMode::AirIntlSaver),
            ("70", TransportMode::FreightLtl),
            ("93", TransportMode::SurePost),
        ];
        for (code, mode) in expect {
            assert_eq!(catalog.classify(CarrierId::Ups, code), mode, "code {code}");
        }
    }
}

#[cfg(test)]
mod ups_parse {
    use gb_core::CarrierId;
    use serde_json::json;

    use crate::adapter::CarrierAdapter;
    use crate::ups::UpsAdapter;

    fn camel_payload() -> serde_json::Value {
        json!({
            "trackResponse": {
                "shipment": [{
                    "package": [{
                        "trackingNumber": "1ZA81H440313373222",
                        "packageWeight": {
                            "unitOfMeasurement": "LBS",
                            "weight": "11.0"
                        },
                        "packageAddress": [
                            {
                                "type": "ORIGIN",
                                "address": {
                                    "city": "Louisville",
                                    "stateProvince": "KY",
                                    "postalCode": "40201",
                                    "country": "US"
                                }
                            },
                            {
                                "type": "DESTINATION",
                                "address": {
                                    "addressLine": "100 Institute Rd",
                                    "city": "Worcester",
                                    "stateProvince": "MA",
                                    "postalCode": "01609"
                                }
                            }
                        ],
                        "service": { "code": "02", "description": "2nd Day Air" }
                    }]
                }]
            }
        })
    }

    #[test]
    fn normalizes_camel_case_payload() {
        let pkg = UpsAdapter::new(false).parse_tracking(&camel_payload()).unwrap();

        assert_eq!(pkg.tracking_number, "1ZA81H440313373222");
        assert_eq!(pkg.carrier, CarrierId::Ups);
        // 11 lb → kg
        assert!((pkg.weight_kg - 4.989512).abs() < 1e-6, "got {}", pkg.weight_kg);
        assert_eq!(pkg.service_code.as_deref(), Some("02"));

        let origin = pkg.origin.unwrap();
        assert_eq!(origin.city.as_deref(), Some("Louisville"));
        let dest = pkg.destination.unwrap();
        assert_eq!(dest.street.as_deref(), Some("100 Institute Rd"));
        // Missing country defaults to US on domestic legs.
        assert_eq!(dest.country.as_deref(), Some("US"));
    }

    #[test]
    fn normalizes_pascal_case_payload() {
        let payload = json!({
            "TrackResponse": {
                "Shipment": [{
                    "Package": [{
                        "TrackingNumber": "1Z999",
                        "PackageWeight": { "UnitOfMeasurement": "KGS", "Weight": 3.5 },
                        "Packageaddress": [],
                        "Service": { "Code": "03", "Description": "Ground" }
                    }]
                }]
            }
        });
        let pkg = UpsAdapter::new(false).parse_tracking(&payload).unwrap();
        assert_eq!(pkg.weight_kg, 3.5);
        assert!(pkg.origin.is_none());
    }

    #[test]
    fn missing_weight_is_a_parse_error() {
        let payload = json!({
            "trackResponse": {
                "shipment": [{ "package": [{ "trackingNumber": "1Z999" }] }]
            }
        });
        assert!(UpsAdapter::new(false).parse_tracking(&payload).is_err());
    }

    #[test]
    fn missing_shipment_is_a_parse_error() {
        let payload = json!({ "trackResponse": { "shipment": [] } });
        assert!(UpsAdapter::new(false).parse_tracking(&payload).is_err());
    }

    #[test]
    fn default_service_when_absent() {
        let payload = json!({
            "trackResponse": {
                "shipment": [{
                    "package": [{
                        "trackingNumber": "1Z999",
                        "packageWeight": { "unitOfMeasurement": "KGS", "weight": "1" }
                    }]
                }]
            }
        });
        let pkg = UpsAdapter::new(false).parse_tracking(&payload).unwrap();
        assert_eq!(pkg.service_code.as_deref(), Some("03"));
        assert_eq!(pkg.service_description.as_deref(), Some("Ground"));
    }
}

#[cfg(test)]
mod normalized_parse {
    use gb_core::CarrierId;
    use serde_json::json;

    use crate::adapter::{adapter_for, CarrierAdapter};

    #[test]
    fn fedex_normalized_record() {
        let payload = json!({
            "tracking_number": "794644790132",
            "weight_kg": 2.5,
            "origin": { "city": "Memphis", "state": "TN", "country": "US" },
            "destination": { "city": "Boston", "state": "MA", "country": "US" },
            "service_code": "FEDEX_GROUND",
            "service_description": "FedEx Ground"
        });
        let pkg = adapter_for(CarrierId::Fedex).parse_tracking(&payload).unwrap();
        assert_eq!(pkg.carrier, CarrierId::Fedex);
        assert_eq!(pkg.weight_kg, 2.5);
        assert_eq!(pkg.origin.unwrap().city.as_deref(), Some("Memphis"));
    }

    #[test]
    fn negative_weight_rejected() {
        let payload = json!({ "tracking_number": "X", "weight_kg": -1.0 });
        assert!(adapter_for(CarrierId::Usps).parse_tracking(&payload).is_err());
    }

    #[test]
    fn empty_tracking_number_rejected() {
        let payload = json!({ "tracking_number": "", "weight_kg": 1.0 });
        assert!(adapter_for(CarrierId::Dhl).parse_tracking(&payload).is_err());
    }

    #[test]
    fn factory_covers_all_carriers() {
        for carrier in CarrierId::ALL {
            assert_eq!(adapter_for(carrier).carrier(), carrier);
        }
    }

    #[test]
    fn adapter_classification_matches_catalog() {
        let adapter = adapter_for(CarrierId::Usps);
        assert_eq!(
            adapter.classify_mode("MEDIA_MAIL"),
            gb_core::TransportMode::GroundEconomy
        );
    }
}

//! Unit tests for gb-core primitives.

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(42.274, -71.808);
        assert!(p.distance_km(p) < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.2 km
        let a = GeoPoint::new(42.0, -71.8);
        let b = GeoPoint::new(43.0, -71.8);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.5, "got {d}");
    }

    #[test]
    fn transatlantic() {
        // Boston → London, great-circle ≈ 5,265 km
        let bos = GeoPoint::new(42.361, -71.057);
        let lon = GeoPoint::new(51.507, -0.128);
        let d = bos.distance_km(lon);
        assert!((d - 5_265.0).abs() < 30.0, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(40.0, -75.0);
        let b = GeoPoint::new(34.0, -118.0);
        assert!((a.distance_km(b) - b.distance_km(a)).abs() < 1e-9);
    }
}

#[cfg(test)]
mod carrier {
    use crate::CarrierId;

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("UPS".parse::<CarrierId>().unwrap(), CarrierId::Ups);
        assert_eq!(" FedEx ".parse::<CarrierId>().unwrap(), CarrierId::Fedex);
        assert_eq!("usps".parse::<CarrierId>().unwrap(), CarrierId::Usps);
        assert_eq!("dhl".parse::<CarrierId>().unwrap(), CarrierId::Dhl);
    }

    #[test]
    fn parse_unknown_fails() {
        assert!("ontrac".parse::<CarrierId>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(CarrierId::Ups.to_string(), "ups");
    }
}

#[cfg(test)]
mod mode {
    use crate::TransportMode;

    #[test]
    fn all_is_exhaustive_and_unique() {
        let mut labels: Vec<&str> = TransportMode::ALL.iter().map(|m| m.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), TransportMode::ALL.len());
    }

    #[test]
    fn parse_roundtrip() {
        for mode in TransportMode::ALL {
            assert_eq!(TransportMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(TransportMode::parse("teleport"), None);
    }

    #[test]
    fn air_predicates() {
        assert!(TransportMode::AirNextDay.is_air());
        assert!(TransportMode::AirIntlSaver.is_air());
        assert!(!TransportMode::GroundStandard.is_air());
        assert!(!TransportMode::OceanStandard.is_air());
    }

    #[test]
    fn international_predicates() {
        assert!(TransportMode::AirIntlExpedited.is_international());
        assert!(TransportMode::OceanStandard.is_international());
        assert!(!TransportMode::AirNextDay.is_international());
        assert!(!TransportMode::RailStandard.is_international());
    }

    #[test]
    fn last_mile_predicates() {
        assert!(TransportMode::LastMileStandard.is_last_mile());
        assert!(TransportMode::LastMileUrban.is_last_mile());
        assert!(!TransportMode::GroundStandard.is_last_mile());
    }
}

#[cfg(test)]
mod address {
    use crate::Address;

    #[test]
    fn query_string_field_order() {
        let addr = Address {
            street:      Some("100 Institute Rd".into()),
            city:        Some("Worcester".into()),
            state:       Some("MA".into()),
            postal_code: Some("01609".into()),
            country:     Some("US".into()),
            coords:      None,
        };
        assert_eq!(
            addr.query_string(),
            "100 Institute Rd, Worcester, MA, 01609, US"
        );
    }

    #[test]
    fn query_string_skips_empty_fields() {
        let addr = Address {
            city:    Some("Worcester".into()),
            state:   Some(String::new()),
            country: Some("US".into()),
            ..Address::default()
        };
        assert_eq!(addr.query_string(), "Worcester, US");
    }

    #[test]
    fn country_trims_empty_to_none() {
        let addr = Address { country: Some(String::new()), ..Address::default() };
        assert_eq!(addr.country(), None);
    }

    #[test]
    fn label_prefers_city() {
        let addr = Address {
            city:        Some("Worcester".into()),
            postal_code: Some("01609".into()),
            ..Address::default()
        };
        assert_eq!(addr.label(), "Worcester");
    }
}

#[cfg(test)]
mod package {
    use crate::{CarrierId, Dimensions, PackageInfo};

    #[test]
    fn dimensions_volume() {
        let dims = Dimensions::new(50.0, 40.0, 30.0);
        assert_eq!(dims.volume_cm3(), 60_000.0);
        assert!(dims.is_valid());
        assert!(!Dimensions::new(50.0, 0.0, 30.0).is_valid());
    }

    #[test]
    fn with_dimensions_appends() {
        let pkg = PackageInfo::new("1Z999", 2.0, CarrierId::Ups)
            .with_dimensions(Dimensions::new(50.0, 40.0, 30.0));
        assert!(pkg.dimensions.is_some());
    }

    #[test]
    fn service_hint_defaults_to_ground() {
        let pkg = PackageInfo::new("1Z999", 2.0, CarrierId::Ups);
        assert_eq!(pkg.service_hint(), "ground");
    }
}

#[cfg(test)]
mod units {
    use crate::units::{in_to_cm, lb_to_kg};

    #[test]
    fn pound_conversion() {
        assert!((lb_to_kg(10.0) - 4.53592).abs() < 1e-9);
    }

    #[test]
    fn inch_conversion() {
        assert!((in_to_cm(12.0) - 30.48).abs() < 1e-9);
    }
}

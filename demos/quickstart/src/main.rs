//! quickstart — smallest end-to-end run of the rust_greenboard engine.
//!
//! Prices three synthetic packages offline: a geocodable domestic ground
//! shipment, an international air shipment that falls back to default
//! distances, and a bulky-but-light box that triggers dimensional weight.
//! Swap [`StaticProvider`] for `gb_geo::NominatimProvider` (feature
//! `nominatim`) to geocode real addresses.

use std::path::Path;

use anyhow::Result;

use gb_batch::BatchRunner;
use gb_core::{Address, CarrierId, Dimensions, GeoPoint, PackageInfo};
use gb_emissions::CalculatorBuilder;
use gb_geo::{RetryPolicy, StaticProvider};
use gb_output::{write_report, CsvWriter};

// ── Fixture geography ─────────────────────────────────────────────────────────

const LOUISVILLE: GeoPoint = GeoPoint { lat: 38.2527, lon: -85.7585 };
const WORCESTER:  GeoPoint = GeoPoint { lat: 42.2626, lon: -71.8023 };

fn address(city: &str, state: &str, postal: &str, country: &str) -> Address {
    Address {
        city:        Some(city.into()),
        state:       Some(state.into()),
        postal_code: Some(postal.into()),
        country:     Some(country.into()),
        ..Address::default()
    }
}

fn packages() -> Vec<PackageInfo> {
    // 1. Domestic ground, both ends geocodable → real great-circle distance.
    let mut ground = PackageInfo::new("1ZA81H440313373222", 10.0, CarrierId::Ups);
    ground.origin = Some(address("Louisville", "KY", "40201", "US"));
    ground.destination = Some(address("Worcester", "MA", "01609", "US"));
    ground.service_code = Some("03".into());
    ground.service_description = Some("Ground".into());

    // 2. International expedited air, nothing geocodable → 5000 km default.
    let mut intl = PackageInfo::new("1ZA81H440313373223", 5.0, CarrierId::Ups);
    intl.origin = Some(address("Worcester", "MA", "01609", "US"));
    intl.destination = Some(address("London", "", "SW1A 1AA", "GB"));
    intl.service_code = Some("08".into());
    intl.service_description = Some("Worldwide Expedited".into());

    // 3. Bulky but light: 50×40×30 cm at 2 kg declared → 12 kg dimensional.
    let mut bulky = PackageInfo::new("794644790132", 2.0, CarrierId::Fedex);
    bulky.origin = Some(address("Memphis", "TN", "38101", "US"));
    bulky.destination = Some(address("Boston", "MA", "02101", "US"));
    bulky.service_code = Some("FEDEX_GROUND".into());
    bulky.service_description = Some("FedEx Ground".into());
    let bulky = bulky.with_dimensions(Dimensions::new(50.0, 40.0, 30.0));

    vec![ground, intl, bulky]
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== quickstart — rust_greenboard emissions engine ===");
    println!();

    // 1. Geocoding fixture: only the ground package's endpoints resolve.
    let packages = packages();
    let provider = StaticProvider::new()
        .with(packages[0].origin.as_ref().unwrap().query_string(), LOUISVILLE)
        .with(packages[0].destination.as_ref().unwrap().query_string(), WORCESTER);

    // 2. Calculator with the standard factor table and distance defaults.
    let calculator = CalculatorBuilder::new(provider)
        .retry(RetryPolicy::immediate(1))
        .build()?;

    // 3. Price all packages with the default worker limit.
    let report = BatchRunner::default().run(&calculator, &packages);

    // 4. Per-package report.
    for item in &report.items {
        match &item.result {
            Ok(result) => {
                println!("{} ({})", item.tracking_number, result.package.carrier);
                println!(
                    "  mode {:<20} distance {:>8.1} km  weight {:>6.2} kg{}",
                    result.transport_mode.to_string(),
                    result.distance_km,
                    result.weight_used_kg,
                    if result.used_dimensional { " (dimensional)" } else { "" },
                );
                for segment in &result.segments {
                    println!(
                        "    {:<20} {:>10.4} kg CO2e",
                        segment.kind.to_string(),
                        segment.emissions_kg
                    );
                }
                println!("  total {:>27.4} kg CO2e", result.total_emissions_kg);
            }
            Err(e) => println!("{}: FAILED — {e}", item.tracking_number),
        }
        println!();
    }

    // 5. Summary + CSV export.
    let summary = report.summary();
    println!(
        "{}/{} packages priced, {:.4} kg CO2e total",
        summary.succeeded,
        summary.total,
        report.total_emissions_kg()
    );

    std::fs::create_dir_all("output/quickstart")?;
    let mut writer = CsvWriter::new(Path::new("output/quickstart"))?;
    write_report(&mut writer, &report)?;
    println!("wrote output/quickstart/{{emissions,segments,failures}}.csv");

    Ok(())
}

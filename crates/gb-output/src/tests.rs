//! Unit tests for output backends.

use gb_batch::{BatchReport, BatchRunner};
use gb_core::{Address, CarrierId, PackageInfo};
use gb_emissions::CalculatorBuilder;
use gb_geo::{RetryPolicy, StaticProvider};

use crate::report::rows_from_report;

fn us_address(city: &str) -> Address {
    Address {
        city:    Some(city.into()),
        country: Some("US".into()),
        ..Address::default()
    }
}

fn ground_package(tracking: &str, weight_kg: f64) -> PackageInfo {
    let mut pkg = PackageInfo::new(tracking, weight_kg, CarrierId::Ups);
    pkg.origin = Some(us_address("Louisville"));
    pkg.destination = Some(us_address("Worcester"));
    pkg.service_code = Some("03".into());
    pkg.service_description = Some("Ground".into());
    pkg
}

/// Two successes (two segments each) and one missing-address failure.
fn sample_report() -> BatchReport {
    let calculator = CalculatorBuilder::new(StaticProvider::new())
        .retry(RetryPolicy::immediate(1))
        .build()
        .unwrap();
    let mut bad = ground_package("1Zbad", 1.0);
    bad.destination = None;
    let packages = vec![
        ground_package("1Z001", 10.0),
        bad,
        ground_package("1Z002", 5.0),
    ];
    BatchRunner::new(2).run(&calculator, &packages)
}

#[cfg(test)]
mod rows {
    use super::*;

    #[test]
    fn report_flattens_in_order() {
        let (results, segments, failures) = rows_from_report(&sample_report());

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].tracking_number, "1Z001");
        assert_eq!(results[1].tracking_number, "1Z002");
        // Two segments per ground package.
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0].segment, "Main Transit");
        assert_eq!(segments[1].segment, "Last Mile Delivery");

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].tracking_number, "1Zbad");
        assert!(failures[0].error.contains("destination"));
    }

    #[test]
    fn result_row_carries_main_leg_values() {
        let (results, _, _) = rows_from_report(&sample_report());
        let row = &results[0];
        assert_eq!(row.carrier, "ups");
        assert_eq!(row.transport_mode, "ground_standard");
        assert_eq!(row.distance_km, 1_200.0);
        assert!(!row.is_dimensional);
        assert!((row.total_emissions_kg - 1.544).abs() < 1e-9);
    }
}

#[cfg(test)]
mod csv_backend {
    use super::*;
    use crate::writer::OutputWriter;
    use crate::CsvWriter;
    use crate::report::write_report;

    #[test]
    fn writes_three_files_with_headers() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        write_report(&mut writer, &sample_report()).unwrap();

        let emissions = std::fs::read_to_string(dir.path().join("emissions.csv")).unwrap();
        let segments = std::fs::read_to_string(dir.path().join("segments.csv")).unwrap();
        let failures = std::fs::read_to_string(dir.path().join("failures.csv")).unwrap();

        // Header + 2 result rows.
        assert_eq!(emissions.lines().count(), 3);
        assert!(emissions.starts_with("tracking_number,carrier,transport_mode"));
        // Header + 4 segment rows.
        assert_eq!(segments.lines().count(), 5);
        // Header + 1 failure row.
        assert_eq!(failures.lines().count(), 2);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_backend {
    use super::*;
    use crate::report::write_report;
    use crate::SqliteWriter;

    #[test]
    fn writes_all_three_tables() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = SqliteWriter::new(dir.path()).unwrap();
        write_report(&mut writer, &sample_report()).unwrap();
        drop(writer);

        let conn = rusqlite::Connection::open(dir.path().join("emissions.db")).unwrap();
        let count = |table: &str| -> i64 {
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))
                .unwrap()
        };
        assert_eq!(count("emissions"), 2);
        assert_eq!(count("segments"), 4);
        assert_eq!(count("failures"), 1);

        let total: f64 = conn
            .query_row(
                "SELECT total_emissions_kg FROM emissions WHERE tracking_number = '1Z001'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert!((total - 1.544).abs() < 1e-9);
    }
}

//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `emissions.db` file in the configured output directory
//! with three tables: `emissions`, `segments`, and `failures`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{EmissionRow, FailureRow, OutputResult, SegmentRow};

/// Writes emission results to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `emissions.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("emissions.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS emissions (
                 tracking_number    TEXT NOT NULL,
                 carrier            TEXT NOT NULL,
                 transport_mode     TEXT NOT NULL,
                 distance_km        REAL NOT NULL,
                 weight_kg          REAL NOT NULL,
                 is_dimensional     INTEGER NOT NULL,
                 emission_factor    REAL NOT NULL,
                 total_emissions_kg REAL NOT NULL
             );
             CREATE TABLE IF NOT EXISTS segments (
                 tracking_number TEXT NOT NULL,
                 segment         TEXT NOT NULL,
                 mode            TEXT NOT NULL,
                 distance_km     REAL NOT NULL,
                 weight_kg       REAL NOT NULL,
                 emission_factor REAL NOT NULL,
                 emissions_kg    REAL NOT NULL
             );
             CREATE TABLE IF NOT EXISTS failures (
                 tracking_number TEXT NOT NULL,
                 error           TEXT NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_results(&mut self, rows: &[EmissionRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO emissions \
                 (tracking_number, carrier, transport_mode, distance_km, weight_kg, \
                  is_dimensional, emission_factor, total_emissions_kg) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tracking_number,
                    row.carrier,
                    row.transport_mode,
                    row.distance_km,
                    row.weight_kg,
                    row.is_dimensional as i64,
                    row.emission_factor,
                    row.total_emissions_kg,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_segments(&mut self, rows: &[SegmentRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO segments \
                 (tracking_number, segment, mode, distance_km, weight_kg, \
                  emission_factor, emissions_kg) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tracking_number,
                    row.segment,
                    row.mode,
                    row.distance_km,
                    row.weight_kg,
                    row.emission_factor,
                    row.emissions_kg,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_failures(&mut self, rows: &[FailureRow]) -> OutputResult<()> {
        for row in rows {
            self.conn.execute(
                "INSERT INTO failures (tracking_number, error) VALUES (?1, ?2)",
                rusqlite::params![row.tracking_number, row.error],
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}

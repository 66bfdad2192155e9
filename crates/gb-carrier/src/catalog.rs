//! Service-code → transport-mode tables.
//!
//! Each carrier owns a closed mapping from its raw service codes to the
//! shared [`TransportMode`] set, plus a mandatory default mode for codes the
//! table does not know.  The tables are built once
//! ([`ServiceCatalog::standard`]) and injected into the emissions engine as
//! read-only configuration — no module-level mutable state.
//!
//! # Case rules
//!
//! UPS issues purely positional codes ("01", "M2") and is matched
//! case-sensitively as issued; the other carriers use named services, which
//! are trimmed and upper-cased before lookup.

use std::collections::HashMap;

use gb_core::{CarrierId, TransportMode};

use crate::CarrierError;

// ── ServiceMap ────────────────────────────────────────────────────────────────

/// One carrier's closed service-code table.
#[derive(Clone, Debug)]
pub struct ServiceMap {
    carrier:      CarrierId,
    entries:      HashMap<String, TransportMode>,
    default_mode: TransportMode,
}

impl ServiceMap {
    /// Empty table.  The default mode is mandatory at construction so a
    /// carrier can never ship without one.
    pub fn new(carrier: CarrierId, default_mode: TransportMode) -> Self {
        Self {
            carrier,
            entries: HashMap::new(),
            default_mode,
        }
    }

    /// Add one code → mode entry (builder style).
    pub fn with(mut self, code: &str, mode: TransportMode) -> Self {
        self.entries.insert(self.normalize(code), mode);
        self
    }

    /// Map a raw service code to a transport mode.  Unmapped codes resolve
    /// to the carrier default — never an error.
    pub fn classify(&self, service_code: &str) -> TransportMode {
        self.entries
            .get(&self.normalize(service_code))
            .copied()
            .unwrap_or(self.default_mode)
    }

    pub fn carrier(&self) -> CarrierId {
        self.carrier
    }

    pub fn default_mode(&self) -> TransportMode {
        self.default_mode
    }

    fn normalize(&self, code: &str) -> String {
        match self.carrier {
            CarrierId::Ups => code.trim().to_string(),
            _ => code.trim().to_ascii_uppercase(),
        }
    }
}

// ── ServiceCatalog ────────────────────────────────────────────────────────────

/// All carriers' service tables, keyed by [`CarrierId`].
#[derive(Clone, Debug, Default)]
pub struct ServiceCatalog {
    maps: HashMap<CarrierId, ServiceMap>,
}

impl ServiceCatalog {
    /// Empty catalog (tests build synthetic ones with [`insert`][Self::insert]).
    pub fn new() -> Self {
        Self::default()
    }

    /// The shipped tables for all four carriers.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.insert(crate::ups::service_map());
        catalog.insert(crate::fedex::service_map());
        catalog.insert(crate::usps::service_map());
        catalog.insert(crate::dhl::service_map());
        catalog
    }

    pub fn insert(&mut self, map: ServiceMap) {
        self.maps.insert(map.carrier(), map);
    }

    pub fn get(&self, carrier: CarrierId) -> Option<&ServiceMap> {
        self.maps.get(&carrier)
    }

    /// Classify a carrier's raw service code.
    ///
    /// A carrier missing from the catalog degrades to
    /// [`TransportMode::GroundStandard`] — an unrecognized carrier must not
    /// block emissions estimation.
    pub fn classify(&self, carrier: CarrierId, service_code: &str) -> TransportMode {
        match self.maps.get(&carrier) {
            Some(map) => map.classify(service_code),
            None => TransportMode::GroundStandard,
        }
    }

    /// Startup check: every recognized carrier must have a table.
    ///
    /// The per-carrier default itself is guaranteed by [`ServiceMap::new`].
    pub fn validate(&self) -> Result<(), CarrierError> {
        for carrier in CarrierId::ALL {
            if !self.maps.contains_key(&carrier) {
                return Err(CarrierError::Config(format!(
                    "service catalog has no table for carrier {carrier}"
                )));
            }
        }
        Ok(())
    }
}

//! The `CarrierAdapter` trait — one implementation per carrier.
//!
//! # Pluggability
//!
//! The emissions pipeline talks to carriers only through this trait, so
//! adding a carrier means adding one `CarrierId` variant and one adapter;
//! the engine itself never changes.  Select an implementation with
//! [`adapter_for`].
//!
//! # Capability set
//!
//! Every adapter can classify service codes and normalize a tracking payload
//! into [`PackageInfo`].  Live API access (`authenticate` +
//! `fetch_tracking`, feature `http`) is optional per carrier: adapters whose
//! integration is not wired up return [`CarrierError::Unsupported`] rather
//! than pretending.

use gb_core::{CarrierId, PackageInfo, TransportMode};
use serde::Deserialize;

use crate::{CarrierError, CarrierResult};

/// API credentials for a carrier's OAuth2 client-credentials flow.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub client_id:     String,
    pub client_secret: String,
}

/// One carrier's integration surface.
///
/// # Thread safety
///
/// Adapters are stateless and must be `Send + Sync` so batch workers can
/// share them.
pub trait CarrierAdapter: Send + Sync {
    /// Which carrier this adapter serves.
    fn carrier(&self) -> CarrierId;

    /// Map the carrier's raw service code to a transport mode.
    ///
    /// Never fails: unmapped codes resolve to the carrier's default mode.
    fn classify_mode(&self, service_code: &str) -> TransportMode;

    /// Normalize a raw tracking payload into the canonical [`PackageInfo`].
    fn parse_tracking(&self, payload: &serde_json::Value) -> CarrierResult<PackageInfo>;

    /// Obtain an API bearer token.
    #[cfg(feature = "http")]
    fn authenticate(&self, _credentials: &Credentials) -> CarrierResult<String> {
        Err(CarrierError::Unsupported {
            carrier:   self.carrier(),
            operation: "authenticate",
        })
    }

    /// Fetch the raw tracking payload for one tracking number.
    #[cfg(feature = "http")]
    fn fetch_tracking(&self, _token: &str, _tracking_number: &str) -> CarrierResult<serde_json::Value> {
        Err(CarrierError::Unsupported {
            carrier:   self.carrier(),
            operation: "fetch_tracking",
        })
    }
}

/// Factory keyed on the closed carrier enum.
pub fn adapter_for(carrier: CarrierId) -> Box<dyn CarrierAdapter> {
    match carrier {
        CarrierId::Ups   => Box::new(crate::ups::UpsAdapter::new(false)),
        CarrierId::Fedex => Box::new(crate::fedex::FedexAdapter::new()),
        CarrierId::Usps  => Box::new(crate::usps::UspsAdapter::new()),
        CarrierId::Dhl   => Box::new(crate::dhl::DhlAdapter::new()),
    }
}

// ── Normalized payload ────────────────────────────────────────────────────────

/// The pre-normalized JSON shape accepted by adapters whose carrier-side
/// wire integration is not implemented (FedEx, USPS, DHL).  Upstream
/// importers deliver records in this form.
#[derive(Deserialize)]
pub(crate) struct NormalizedRecord {
    pub tracking_number:     String,
    pub weight_kg:           f64,
    #[serde(default)]
    pub origin:              Option<gb_core::Address>,
    #[serde(default)]
    pub destination:         Option<gb_core::Address>,
    #[serde(default)]
    pub service_code:        Option<String>,
    #[serde(default)]
    pub service_description: Option<String>,
    #[serde(default)]
    pub pickup_date:         Option<String>,
}

/// Shared parse path for the normalized shape.
pub(crate) fn parse_normalized(
    carrier: CarrierId,
    payload: &serde_json::Value,
) -> CarrierResult<PackageInfo> {
    let record: NormalizedRecord = serde_json::from_value(payload.clone())?;
    if record.tracking_number.is_empty() {
        return Err(CarrierError::Parse("empty tracking number".into()));
    }
    if record.weight_kg < 0.0 {
        return Err(CarrierError::Parse(format!(
            "negative weight {} for {}",
            record.weight_kg, record.tracking_number
        )));
    }
    let mut pkg = PackageInfo::new(record.tracking_number, record.weight_kg, carrier);
    pkg.origin = record.origin;
    pkg.destination = record.destination;
    pkg.service_code = record.service_code;
    pkg.service_description = record.service_description;
    pkg.pickup_date = record.pickup_date;
    Ok(pkg)
}

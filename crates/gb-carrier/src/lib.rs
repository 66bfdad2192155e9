//! `gb-carrier` — carrier adapters and service-code classification.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`adapter`] | `CarrierAdapter` trait, `Credentials`, `adapter_for` factory |
//! | [`catalog`] | `ServiceMap`, `ServiceCatalog` (code → mode tables)          |
//! | [`ups`]     | UPS adapter: full payload normalization (+ live API)         |
//! | [`fedex`]   | FedEx adapter                                                |
//! | [`usps`]    | USPS adapter                                                 |
//! | [`dhl`]     | DHL adapter                                                  |
//! | [`error`]   | `CarrierError`, `CarrierResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag   | Effect                                                          |
//! |--------|-----------------------------------------------------------------|
//! | `http` | Enables `authenticate`/`fetch_tracking` via the `reqwest` crate.|
//!
//! Adapters normalize carrier-specific tracking payloads into the canonical
//! `PackageInfo` at this boundary — nothing past this crate ever sees a
//! carrier-specific shape.  Classification never fails: unmapped codes fall
//! back to the carrier's default mode, unknown carriers to ground standard.

pub mod adapter;
pub mod catalog;
pub mod dhl;
pub mod error;
pub mod fedex;
pub mod ups;
pub mod usps;

#[cfg(test)]
mod tests;

pub use adapter::{adapter_for, CarrierAdapter, Credentials};
pub use catalog::{ServiceCatalog, ServiceMap};
pub use dhl::DhlAdapter;
pub use error::{CarrierError, CarrierResult};
pub use fedex::FedexAdapter;
pub use ups::UpsAdapter;
pub use usps::UspsAdapter;

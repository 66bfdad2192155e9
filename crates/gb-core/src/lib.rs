//! `gb-core` — foundational types for the `rust_greenboard` emissions engine.
//!
//! This crate is a dependency of every other `gb-*` crate.  It intentionally
//! has no `gb-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`geo`]      | `GeoPoint`, haversine distance                        |
//! | [`carrier`]  | `CarrierId` enum                                      |
//! | [`mode`]     | `TransportMode` enum                                  |
//! | [`address`]  | `Address` (normalized postal address)                 |
//! | [`package`]  | `PackageInfo` (normalized tracking record)            |
//! | [`units`]    | Imperial → metric conversion constants                |
//! | [`error`]    | `GbError`, `GbResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod address;
pub mod carrier;
pub mod error;
pub mod geo;
pub mod mode;
pub mod package;
pub mod units;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use address::Address;
pub use carrier::CarrierId;
pub use error::{GbError, GbResult};
pub use geo::GeoPoint;
pub use mode::TransportMode;
pub use package::{Dimensions, PackageInfo};

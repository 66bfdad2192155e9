//! The closed set of supported carriers.
//!
//! Adding a carrier means adding one variant here plus one adapter in
//! `gb-carrier`; the emissions engine itself never changes.

use std::str::FromStr;

use crate::GbError;

/// Identifier of a supported shipping carrier.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarrierId {
    Ups,
    Fedex,
    Usps,
    Dhl,
}

impl CarrierId {
    /// All supported carriers, in declaration order.
    pub const ALL: [CarrierId; 4] = [
        CarrierId::Ups,
        CarrierId::Fedex,
        CarrierId::Usps,
        CarrierId::Dhl,
    ];

    /// Lower-case label, useful for CSV column values and map keys.
    pub fn as_str(self) -> &'static str {
        match self {
            CarrierId::Ups   => "ups",
            CarrierId::Fedex => "fedex",
            CarrierId::Usps  => "usps",
            CarrierId::Dhl   => "dhl",
        }
    }
}

impl std::fmt::Display for CarrierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarrierId {
    type Err = GbError;

    /// Case-insensitive, whitespace-tolerant parse ("UPS", " ups " → `Ups`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ups"   => Ok(CarrierId::Ups),
            "fedex" => Ok(CarrierId::Fedex),
            "usps"  => Ok(CarrierId::Usps),
            "dhl"   => Ok(CarrierId::Dhl),
            other => Err(GbError::Parse(format!("unknown carrier {other:?}"))),
        }
    }
}

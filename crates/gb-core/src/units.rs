//! Imperial → metric conversion constants.
//!
//! US carriers report weight in pounds and dimensions in inches; adapters
//! normalize to kilograms and centimetres at the boundary so nothing past
//! `PackageInfo` ever sees imperial units.

/// Pounds → kilograms.
pub const LB_TO_KG: f64 = 0.453592;

/// Inches → centimetres.
pub const IN_TO_CM: f64 = 2.54;

/// Convert a weight in pounds to kilograms.
#[inline]
pub fn lb_to_kg(lb: f64) -> f64 {
    lb * LB_TO_KG
}

/// Convert a length in inches to centimetres.
#[inline]
pub fn in_to_cm(inches: f64) -> f64 {
    inches * IN_TO_CM
}

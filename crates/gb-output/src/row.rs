//! Plain data row types written by output backends.

/// One successfully priced package.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionRow {
    pub tracking_number:    String,
    pub carrier:            String,
    pub transport_mode:     String,
    /// Main-transit distance; the last-mile leg is in its own segment row.
    pub distance_km:        f64,
    pub weight_kg:          f64,
    pub is_dimensional:     bool,
    pub emission_factor:    f64,
    pub total_emissions_kg: f64,
}

/// One priced leg of one package.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentRow {
    pub tracking_number: String,
    /// "Main Transit" or "Last Mile Delivery".
    pub segment:         String,
    pub mode:            String,
    pub distance_km:     f64,
    pub weight_kg:       f64,
    pub emission_factor: f64,
    pub emissions_kg:    f64,
}

/// One package that produced no result.
#[derive(Debug, Clone, PartialEq)]
pub struct FailureRow {
    pub tracking_number: String,
    pub error:           String,
}

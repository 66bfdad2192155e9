//! Transport mode enum shared across all emissions-related crates.
//!
//! The set is closed: every mode must have an entry in the emission-factor
//! table, and `EmissionFactors::validate` in `gb-emissions` checks the table
//! against [`TransportMode::ALL`] at startup.  Service-code → mode mapping
//! is carrier-specific and lives in `gb-carrier`.

/// How the main transit leg of a shipment moved.
///
/// Domestic air is split by speed tier because faster services consolidate
/// less; international air is split out because long-haul flights are more
/// fuel-efficient per km than short-haul.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransportMode {
    // Ground
    GroundStandard,
    GroundEconomy,
    GroundExpedited,
    GroundTwoDay,
    // Air — domestic (short-haul)
    AirNextDay,
    AirNextDayEarly,
    AirNextDaySaver,
    AirTwoDay,
    AirTwoDayEarly,
    AirThreeDay,
    // Air — international (long-haul)
    AirIntlExpress,
    AirIntlExpedited,
    AirIntlSaver,
    // Ocean
    OceanStandard,
    OceanExpedited,
    // Rail
    RailStandard,
    // Last mile
    LastMileStandard,
    LastMileUrban,
    // Freight
    FreightLtl,
    FreightFtl,
    // Hybrid carrier/postal
    MailInnovations,
    SurePost,
}

impl TransportMode {
    /// Every mode, in declaration order.  The emission-factor table is
    /// validated against this list at startup.
    pub const ALL: [TransportMode; 22] = [
        TransportMode::GroundStandard,
        TransportMode::GroundEconomy,
        TransportMode::GroundExpedited,
        TransportMode::GroundTwoDay,
        TransportMode::AirNextDay,
        TransportMode::AirNextDayEarly,
        TransportMode::AirNextDaySaver,
        TransportMode::AirTwoDay,
        TransportMode::AirTwoDayEarly,
        TransportMode::AirThreeDay,
        TransportMode::AirIntlExpress,
        TransportMode::AirIntlExpedited,
        TransportMode::AirIntlSaver,
        TransportMode::OceanStandard,
        TransportMode::OceanExpedited,
        TransportMode::RailStandard,
        TransportMode::LastMileStandard,
        TransportMode::LastMileUrban,
        TransportMode::FreightLtl,
        TransportMode::FreightFtl,
        TransportMode::MailInnovations,
        TransportMode::SurePost,
    ];

    /// Snake-case label, useful for CSV/SQLite column values and factor
    /// override files.
    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::GroundStandard   => "ground_standard",
            TransportMode::GroundEconomy    => "ground_economy",
            TransportMode::GroundExpedited  => "ground_expedited",
            TransportMode::GroundTwoDay     => "ground_2day",
            TransportMode::AirNextDay       => "air_next_day",
            TransportMode::AirNextDayEarly  => "air_next_day_early",
            TransportMode::AirNextDaySaver  => "air_next_day_saver",
            TransportMode::AirTwoDay        => "air_2day",
            TransportMode::AirTwoDayEarly   => "air_2day_early",
            TransportMode::AirThreeDay      => "air_3day",
            TransportMode::AirIntlExpress   => "air_intl_express",
            TransportMode::AirIntlExpedited => "air_intl_expedited",
            TransportMode::AirIntlSaver     => "air_intl_saver",
            TransportMode::OceanStandard    => "ocean_standard",
            TransportMode::OceanExpedited   => "ocean_expedited",
            TransportMode::RailStandard     => "rail_standard",
            TransportMode::LastMileStandard => "last_mile_standard",
            TransportMode::LastMileUrban    => "last_mile_urban",
            TransportMode::FreightLtl       => "freight_ltl",
            TransportMode::FreightFtl       => "freight_ftl",
            TransportMode::MailInnovations  => "mail_innovations",
            TransportMode::SurePost         => "surepost",
        }
    }

    /// Parse the snake-case label produced by [`as_str`][Self::as_str].
    pub fn parse(s: &str) -> Option<TransportMode> {
        TransportMode::ALL.into_iter().find(|m| m.as_str() == s)
    }

    /// `true` for any air-based mode, domestic or international.
    pub fn is_air(self) -> bool {
        matches!(
            self,
            TransportMode::AirNextDay
                | TransportMode::AirNextDayEarly
                | TransportMode::AirNextDaySaver
                | TransportMode::AirTwoDay
                | TransportMode::AirTwoDayEarly
                | TransportMode::AirThreeDay
                | TransportMode::AirIntlExpress
                | TransportMode::AirIntlExpedited
                | TransportMode::AirIntlSaver
        )
    }

    /// `true` for modes that only run between countries.
    pub fn is_international(self) -> bool {
        matches!(
            self,
            TransportMode::AirIntlExpress
                | TransportMode::AirIntlExpedited
                | TransportMode::AirIntlSaver
                | TransportMode::OceanStandard
                | TransportMode::OceanExpedited
        )
    }

    /// `true` for the local-delivery modes.  Shipments classified here get
    /// no additional last-mile segment from the engine.
    pub fn is_last_mile(self) -> bool {
        matches!(
            self,
            TransportMode::LastMileStandard | TransportMode::LastMileUrban
        )
    }

    /// Human-readable service description for reports.
    pub fn description(self) -> &'static str {
        match self {
            TransportMode::GroundStandard   => "Standard Ground Shipping",
            TransportMode::GroundEconomy    => "Economy Ground Shipping",
            TransportMode::GroundExpedited  => "Expedited Ground Shipping",
            TransportMode::GroundTwoDay     => "2-Day Ground Shipping",
            TransportMode::AirNextDay       => "Next Day Air",
            TransportMode::AirNextDayEarly  => "Next Day Air Early AM",
            TransportMode::AirNextDaySaver  => "Next Day Air Saver",
            TransportMode::AirTwoDay        => "2nd Day Air",
            TransportMode::AirTwoDayEarly   => "2nd Day Air Early AM",
            TransportMode::AirThreeDay      => "3 Day Select",
            TransportMode::AirIntlExpress   => "International Express",
            TransportMode::AirIntlExpedited => "International Expedited",
            TransportMode::AirIntlSaver     => "International Saver",
            TransportMode::OceanStandard    => "Standard Ocean Freight",
            TransportMode::OceanExpedited   => "Expedited Ocean Freight",
            TransportMode::RailStandard     => "Rail Freight",
            TransportMode::LastMileStandard => "Last Mile Delivery",
            TransportMode::LastMileUrban    => "Urban Last Mile Delivery",
            TransportMode::FreightLtl       => "Less Than Truckload Freight",
            TransportMode::FreightFtl       => "Full Truckload Freight",
            TransportMode::MailInnovations  => "Mail Innovations",
            TransportMode::SurePost         => "SurePost",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

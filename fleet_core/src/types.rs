//! Core types specific to fleet_core

use serde::{Deserialize, Serialize};

/// Archetype identifier for a ship
///
/// Capability behaviour (barrage targeting, upgrade transforms) is driven by
/// catalog data keyed off this tag, not by the tag itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipClass {
    Cruiser,
    Dreadnought,
    Flagship,
    Carrier,
    Fighter,
    Destroyer,
    WarSun,
}

impl ShipClass {
    /// Get all ship classes
    pub fn all() -> &'static [ShipClass] {
        &[
            ShipClass::Cruiser,
            ShipClass::Dreadnought,
            ShipClass::Flagship,
            ShipClass::Carrier,
            ShipClass::Fighter,
            ShipClass::Destroyer,
            ShipClass::WarSun,
        ]
    }
}

/// Named quantile levels reported by every hit-distribution estimator
pub const HIT_QUANTILES: [f64; 9] = [0.01, 0.10, 0.25, 0.33, 0.50, 0.66, 0.75, 0.90, 0.99];

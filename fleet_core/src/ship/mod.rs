//! Ship - the unit data model and its advance transform

mod spec;

pub use spec::{ShipSpec, UpgradeSpec};

use crate::types::ShipClass;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ship validation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShipError {
    #[error("combat value {0} is outside the d10 threshold range 1-10")]
    CombatOutOfRange(i64),
    #[error("ship must roll at least one combat die")]
    NoCombatDice,
    #[error("anti-fighter combat value {0} is outside the d10 threshold range 1-10")]
    BarrageCombatOutOfRange(i64),
    #[error("bombardment combat value {0} is outside the d10 threshold range 1-10")]
    BombardmentCombatOutOfRange(i64),
    #[error("upgrade drives {0} below zero")]
    UpgradeUnderflow(&'static str),
    #[error("{0} has no upgrade path")]
    NotUpgradeable(String),
}

/// One combat-capable vessel
///
/// Ships are built from a validated [`ShipSpec`] (usually via the catalog);
/// the combat engine assumes the d10 threshold invariants hold and never
/// re-checks them per round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    /// Display name
    pub name: String,
    /// Archetype tag
    pub class: ShipClass,
    /// Hit threshold on a d10; a roll >= combat scores. Lower is better.
    pub combat: u8,
    /// Resource price, display-only to the engine
    pub cost: f64,
    /// Movement value, aggregated only
    #[serde(rename = "move")]
    pub move_: u32,
    /// Combat dice rolled per firing pass
    pub hits: u32,
    /// Transport capacity, aggregated only
    pub capacity: u32,
    /// One-shot hit negation; consumed once per engagement
    pub sustain_damage: bool,
    /// Bombardment capability. Inert data: no phase consumes it.
    pub bombardment: bool,
    pub bombardment_hits: u32,
    pub bombardment_combat: u8,
    /// Pre-engagement barrage against opposing fighters
    pub anti_fighter_barrage: bool,
    pub anti_fighter_hits: u32,
    pub anti_fighter_combat: u8,
    /// Targetable by anti-fighter barrage
    pub is_fighter: bool,
    /// Fires once pre-engagement, then withdraws from the main loop
    pub space_cannon: bool,
    /// The archetype's advance transform; `None` marks a non-upgradeable ship
    pub upgrade: Option<UpgradeSpec>,
}

impl Ship {
    /// Probability that one of this ship's combat dice scores a hit
    pub fn hit_probability(&self) -> f64 {
        f64::from(11 - u32::from(self.combat)) / 10.0
    }

    /// Apply the archetype's advance transform, returning the advanced ship
    ///
    /// The receiver is left untouched; callers that want both versions keep
    /// the original. Ships without an upgrade path are rejected.
    pub fn advance(&self) -> Result<Ship, ShipError> {
        match &self.upgrade {
            Some(upgrade) => upgrade.apply(self),
            None => Err(ShipError::NotUpgradeable(self.name.clone())),
        }
    }
}

/// Check a d10 hit threshold
pub(crate) fn validate_threshold(
    value: i64,
    err: fn(i64) -> ShipError,
) -> Result<u8, ShipError> {
    if (1..=10).contains(&value) {
        Ok(value as u8)
    } else {
        Err(err(value))
    }
}

//! ShipSpec - serializable archetype rows and their upgrade transforms

use super::{validate_threshold, Ship, ShipError};
use crate::types::ShipClass;
use serde::{Deserialize, Serialize};

/// Base attributes of one ship archetype, as stored in the catalog
///
/// `build` is the validated construction path for [`Ship`]: the d10 threshold
/// invariants are checked here, once, so the engine never has to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipSpec {
    pub name: String,
    pub class: ShipClass,
    pub combat: i64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default, rename = "move")]
    pub move_: u32,
    #[serde(default = "default_hits")]
    pub hits: u32,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub sustain_damage: bool,
    #[serde(default)]
    pub bombardment: bool,
    #[serde(default)]
    pub bombardment_hits: u32,
    #[serde(default)]
    pub bombardment_combat: i64,
    #[serde(default)]
    pub anti_fighter_barrage: bool,
    #[serde(default)]
    pub anti_fighter_hits: u32,
    #[serde(default)]
    pub anti_fighter_combat: i64,
    #[serde(default)]
    pub is_fighter: bool,
    #[serde(default)]
    pub space_cannon: bool,
    #[serde(default)]
    pub upgrade: Option<UpgradeSpec>,
}

fn default_hits() -> u32 {
    1
}

impl ShipSpec {
    /// A spec with only the required attributes set; everything else defaults
    pub fn minimal(name: impl Into<String>, class: ShipClass, combat: i64) -> Self {
        ShipSpec {
            name: name.into(),
            class,
            combat,
            cost: 0.0,
            move_: 0,
            hits: 1,
            capacity: 0,
            sustain_damage: false,
            bombardment: false,
            bombardment_hits: 0,
            bombardment_combat: 0,
            anti_fighter_barrage: false,
            anti_fighter_hits: 0,
            anti_fighter_combat: 0,
            is_fighter: false,
            space_cannon: false,
            upgrade: None,
        }
    }

    /// Validate and construct the ship this spec describes
    pub fn build(&self) -> Result<Ship, ShipError> {
        let combat = validate_threshold(self.combat, ShipError::CombatOutOfRange)?;
        if self.hits < 1 {
            return Err(ShipError::NoCombatDice);
        }
        let anti_fighter_combat = if self.anti_fighter_barrage {
            validate_threshold(self.anti_fighter_combat, ShipError::BarrageCombatOutOfRange)?
        } else {
            0
        };
        let bombardment_combat = if self.bombardment {
            validate_threshold(self.bombardment_combat, ShipError::BombardmentCombatOutOfRange)?
        } else {
            0
        };

        Ok(Ship {
            name: self.name.clone(),
            class: self.class,
            combat,
            cost: self.cost,
            move_: self.move_,
            hits: self.hits,
            capacity: self.capacity,
            sustain_damage: self.sustain_damage,
            bombardment: self.bombardment,
            bombardment_hits: self.bombardment_hits,
            bombardment_combat,
            anti_fighter_barrage: self.anti_fighter_barrage,
            anti_fighter_hits: self.anti_fighter_hits,
            anti_fighter_combat,
            is_fighter: self.is_fighter,
            space_cannon: self.space_cannon,
            upgrade: self.upgrade.clone(),
        })
    }
}

/// Data-driven advance transform for one archetype
///
/// Signed deltas applied to the base attributes, plus the marker appended to
/// the name. The transformed ship is re-validated so a bad delta table cannot
/// smuggle an out-of-range threshold past construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeSpec {
    #[serde(default)]
    pub combat: i64,
    #[serde(default, rename = "move")]
    pub move_: i64,
    #[serde(default)]
    pub capacity: i64,
    #[serde(default)]
    pub anti_fighter_hits: i64,
    #[serde(default)]
    pub anti_fighter_combat: i64,
    #[serde(default = "default_name_suffix")]
    pub name_suffix: String,
}

fn default_name_suffix() -> String {
    "I".to_string()
}

impl Default for UpgradeSpec {
    fn default() -> Self {
        UpgradeSpec {
            combat: 0,
            move_: 0,
            capacity: 0,
            anti_fighter_hits: 0,
            anti_fighter_combat: 0,
            name_suffix: default_name_suffix(),
        }
    }
}

impl UpgradeSpec {
    /// Apply the transform to `ship`, returning the advanced copy
    pub fn apply(&self, ship: &Ship) -> Result<Ship, ShipError> {
        let mut advanced = ship.clone();

        advanced.combat =
            validate_threshold(i64::from(ship.combat) + self.combat, ShipError::CombatOutOfRange)?;
        advanced.move_ = shift(ship.move_, self.move_, "move")?;
        advanced.capacity = shift(ship.capacity, self.capacity, "capacity")?;
        advanced.anti_fighter_hits =
            shift(ship.anti_fighter_hits, self.anti_fighter_hits, "anti_fighter_hits")?;
        if self.anti_fighter_combat != 0 {
            advanced.anti_fighter_combat = validate_threshold(
                i64::from(ship.anti_fighter_combat) + self.anti_fighter_combat,
                ShipError::BarrageCombatOutOfRange,
            )?;
        }
        advanced.name.push_str(&self.name_suffix);

        Ok(advanced)
    }
}

fn shift(base: u32, delta: i64, field: &'static str) -> Result<u32, ShipError> {
    let shifted = i64::from(base) + delta;
    u32::try_from(shifted).map_err(|_| ShipError::UpgradeUnderflow(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_rejects_bad_combat() {
        let spec = ShipSpec::minimal("Hulk", ShipClass::Cruiser, 11);
        assert_eq!(spec.build(), Err(ShipError::CombatOutOfRange(11)));

        let spec = ShipSpec::minimal("Hulk", ShipClass::Cruiser, 0);
        assert_eq!(spec.build(), Err(ShipError::CombatOutOfRange(0)));
    }

    #[test]
    fn test_build_rejects_zero_hits() {
        let mut spec = ShipSpec::minimal("Hulk", ShipClass::Cruiser, 7);
        spec.hits = 0;
        assert_eq!(spec.build(), Err(ShipError::NoCombatDice));
    }

    #[test]
    fn test_build_rejects_bad_barrage_threshold() {
        let mut spec = ShipSpec::minimal("Escort", ShipClass::Destroyer, 9);
        spec.anti_fighter_barrage = true;
        spec.anti_fighter_hits = 2;
        spec.anti_fighter_combat = 0;
        assert_eq!(spec.build(), Err(ShipError::BarrageCombatOutOfRange(0)));
    }

    #[test]
    fn test_barrage_threshold_ignored_without_capability() {
        // An unset threshold is fine for ships that never barrage
        let spec = ShipSpec::minimal("Hulk", ShipClass::Cruiser, 7);
        assert!(spec.build().is_ok());
    }

    #[test]
    fn test_upgrade_rejects_threshold_escape() {
        let spec = ShipSpec::minimal("Glass", ShipClass::Fighter, 1);
        let ship = spec.build().unwrap();
        let upgrade = UpgradeSpec {
            combat: -1,
            ..Default::default()
        };
        assert_eq!(upgrade.apply(&ship), Err(ShipError::CombatOutOfRange(0)));
    }

    #[test]
    fn test_upgrade_rejects_negative_move() {
        let spec = ShipSpec::minimal("Slow", ShipClass::Carrier, 9);
        let ship = spec.build().unwrap();
        let upgrade = UpgradeSpec {
            move_: -1,
            ..Default::default()
        };
        assert_eq!(upgrade.apply(&ship), Err(ShipError::UpgradeUnderflow("move")));
    }

    #[test]
    fn test_spec_toml_round_trip() {
        let toml = r#"
name = "Destroyer I"
class = "destroyer"
combat = 9
cost = 5.0
move = 2
anti_fighter_barrage = true
anti_fighter_hits = 2
anti_fighter_combat = 9

[upgrade]
combat = -1
anti_fighter_hits = 1
anti_fighter_combat = -3
"#;
        let spec: ShipSpec = toml::from_str(toml).unwrap();
        let ship = spec.build().unwrap();
        assert_eq!(ship.combat, 9);
        assert!(ship.anti_fighter_barrage);

        let advanced = ship.advance().unwrap();
        assert_eq!(advanced.combat, 8);
        assert_eq!(advanced.anti_fighter_hits, 3);
        assert_eq!(advanced.anti_fighter_combat, 6);
        assert_eq!(advanced.name, "Destroyer II");
    }
}

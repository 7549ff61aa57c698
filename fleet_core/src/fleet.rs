//! Fleet - an ordered roster of ships

use crate::ship::Ship;
use serde::{Deserialize, Serialize};

/// Ordered collection of ships belonging to one side of an engagement
///
/// Insertion order carries no combat meaning (damage selection is by
/// attribute) but is preserved for survivor-roster reporting. Destroyed ships
/// are removed outright; a fleet never holds dead placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    pub ships: Vec<Ship>,
}

impl Fleet {
    /// Create an empty fleet
    pub fn new() -> Self {
        Fleet::default()
    }

    pub fn push(&mut self, ship: Ship) {
        self.ships.push(ship);
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Ship names in roster order
    pub fn roster(&self) -> Vec<String> {
        self.ships.iter().map(|ship| ship.name.clone()).collect()
    }

    /// Total resource price of the fleet
    pub fn total_cost(&self) -> f64 {
        self.ships.iter().map(|ship| ship.cost).sum()
    }

    /// Ship count plus unspent sustain-damage shields
    ///
    /// A live shield counts as one extra effective hit point.
    pub fn health(&self) -> usize {
        let shields = self.ships.iter().filter(|ship| ship.sustain_damage).count();
        self.ships.len() + shields
    }

    /// Fleet movement: the slowest ship's value, `None` for an empty fleet
    pub fn movement(&self) -> Option<u32> {
        self.ships.iter().map(|ship| ship.move_).min()
    }

    /// Total transport capacity
    pub fn total_capacity(&self) -> u32 {
        self.ships.iter().map(|ship| ship.capacity).sum()
    }
}

impl From<Vec<Ship>> for Fleet {
    fn from(ships: Vec<Ship>) -> Self {
        Fleet { ships }
    }
}

impl FromIterator<Ship> for Fleet {
    fn from_iter<I: IntoIterator<Item = Ship>>(iter: I) -> Self {
        Fleet {
            ships: iter.into_iter().collect(),
        }
    }
}

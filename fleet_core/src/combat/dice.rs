//! Ten-sided dice helpers

use crate::fleet::Fleet;
use rand::Rng;

/// Roll one d10
pub fn roll_d10(rng: &mut impl Rng) -> u8 {
    rng.gen_range(1..=10)
}

/// One simultaneous firing pass: one d10 per ship against its own threshold
///
/// Returns the number of scored hits. The roster is read only; hit totals for
/// both sides of a round must be computed before any damage is assigned.
pub fn roll_hits(fleet: &Fleet, rng: &mut impl Rng) -> u32 {
    fleet
        .ships
        .iter()
        .filter(|ship| roll_d10(rng) >= ship.combat)
        .count() as u32
}

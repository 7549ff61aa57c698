//! Pre-engagement effects: anti-fighter barrage and space cannon fire

use super::damage::assign_damage;
use super::dice::roll_d10;
use crate::fleet::Fleet;
use rand::Rng;

/// Resolve the one-shot opening phase for both fleets
///
/// Fixed order: barrage, then space cannon fire, then cannon withdrawal.
/// Within each step both hit pools are rolled from the rosters as they stand
/// entering the step, so neither side's losses feed back into the other's
/// dice for that step.
pub fn resolve_opening(fleet_a: &mut Fleet, fleet_b: &mut Fleet, rng: &mut impl Rng) {
    let barrage_a = roll_barrage(fleet_a, rng);
    let barrage_b = roll_barrage(fleet_b, rng);
    strike_fighters(fleet_b, barrage_a);
    strike_fighters(fleet_a, barrage_b);

    let cannon_a = roll_space_cannons(fleet_a, rng);
    let cannon_b = roll_space_cannons(fleet_b, rng);
    assign_damage(fleet_b, cannon_a);
    assign_damage(fleet_a, cannon_b);

    withdraw_space_cannons(fleet_a);
    withdraw_space_cannons(fleet_b);
}

/// Pooled anti-fighter barrage hits for one side
fn roll_barrage(fleet: &Fleet, rng: &mut impl Rng) -> u32 {
    let mut hits = 0;
    for ship in fleet.ships.iter().filter(|s| s.anti_fighter_barrage) {
        for _ in 0..ship.anti_fighter_hits {
            if roll_d10(rng) >= ship.anti_fighter_combat {
                hits += 1;
            }
        }
    }
    hits
}

/// Each barrage hit downs at most one fighter, in roster order
fn strike_fighters(fleet: &mut Fleet, mut hits: u32) {
    fleet.ships.retain(|ship| {
        if hits > 0 && ship.is_fighter {
            hits -= 1;
            false
        } else {
            true
        }
    });
}

/// Pooled space-cannon hits: one die per cannon against its own threshold
fn roll_space_cannons(fleet: &Fleet, rng: &mut impl Rng) -> u32 {
    fleet
        .ships
        .iter()
        .filter(|ship| ship.space_cannon)
        .filter(|ship| roll_d10(rng) >= ship.combat)
        .count() as u32
}

/// Space cannons never join the main attrition loop
fn withdraw_space_cannons(fleet: &mut Fleet) {
    fleet.ships.retain(|ship| !ship.space_cannon);
}

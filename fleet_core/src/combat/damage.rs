//! Damage assignment - shields absorb first, then the worst attackers die

use crate::fleet::Fleet;

/// Apply `hits` incoming hits to a fleet
///
/// Absorption pass: ships with an unspent sustain-damage shield negate one
/// hit each, in roster order. Destruction pass: remaining hits each remove
/// the ship with the highest combat value (the statistically weakest
/// attacker); ties keep the earliest ship. Never removes more ships than
/// there are unabsorbed hits, and never leaves hits unresolved while ships
/// remain.
pub fn assign_damage(fleet: &mut Fleet, mut hits: u32) {
    for ship in fleet.ships.iter_mut() {
        if hits == 0 {
            break;
        }
        if ship.sustain_damage {
            ship.sustain_damage = false;
            hits -= 1;
        }
    }

    while hits > 0 && !fleet.ships.is_empty() {
        let mut worst = 0;
        for i in 1..fleet.ships.len() {
            if fleet.ships[i].combat > fleet.ships[worst].combat {
                worst = i;
            }
        }
        fleet.ships.remove(worst);
        hits -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::{Ship, ShipSpec};
    use crate::types::ShipClass;
    use proptest::prelude::*;

    fn ship(name: &str, combat: i64, sustain: bool) -> Ship {
        let mut spec = ShipSpec::minimal(name, ShipClass::Cruiser, combat);
        spec.sustain_damage = sustain;
        spec.build().unwrap()
    }

    #[test]
    fn test_shield_absorbs_one_hit() {
        let mut fleet: Fleet = vec![ship("Dreadnought I", 5, true)].into();
        assign_damage(&mut fleet, 1);

        assert_eq!(fleet.len(), 1);
        assert!(!fleet.ships[0].sustain_damage);
    }

    #[test]
    fn test_shields_spent_before_any_loss() {
        let mut fleet: Fleet = vec![
            ship("Fighter I", 9, false),
            ship("Dreadnought I", 5, true),
            ship("Flagship I", 5, true),
        ]
        .into();
        assign_damage(&mut fleet, 2);

        // Both shields consumed, nothing destroyed
        assert_eq!(fleet.len(), 3);
        assert!(fleet.ships.iter().all(|s| !s.sustain_damage));
    }

    #[test]
    fn test_worst_attacker_dies_first() {
        let mut fleet: Fleet = vec![
            ship("War Sun", 3, false),
            ship("Cruiser I", 7, false),
            ship("Fighter I", 9, false),
        ]
        .into();
        assign_damage(&mut fleet, 1);

        assert_eq!(fleet.roster(), vec!["War Sun", "Cruiser I"]);
    }

    #[test]
    fn test_tie_keeps_earliest() {
        let mut fleet: Fleet = vec![
            ship("First", 9, false),
            ship("Second", 9, false),
        ]
        .into();
        assign_damage(&mut fleet, 1);

        assert_eq!(fleet.roster(), vec!["Second"]);
    }

    #[test]
    fn test_excess_hits_wipe_fleet() {
        let mut fleet: Fleet = vec![ship("A", 7, false), ship("B", 7, true)].into();
        assign_damage(&mut fleet, 10);

        assert!(fleet.is_empty());
    }

    #[test]
    fn test_zero_hits_is_a_no_op() {
        let mut fleet: Fleet = vec![ship("A", 7, true)].into();
        assign_damage(&mut fleet, 0);

        assert_eq!(fleet.len(), 1);
        assert!(fleet.ships[0].sustain_damage);
    }

    proptest! {
        /// Survivors never undercount: len' >= len - max(0, hits - shields)
        #[test]
        fn prop_survivor_bound(
            combats in prop::collection::vec(1i64..=10, 0..12),
            shields in prop::collection::vec(any::<bool>(), 0..12),
            hits in 0u32..20,
        ) {
            let ships: Vec<Ship> = combats
                .iter()
                .zip(shields.iter().chain(std::iter::repeat(&false)))
                .enumerate()
                .map(|(i, (&c, &sustain))| ship(&format!("S{i}"), c, sustain))
                .collect();
            let shield_count = ships.iter().filter(|s| s.sustain_damage).count() as u32;
            let before = ships.len();

            let mut fleet: Fleet = ships.into();
            assign_damage(&mut fleet, hits);

            let destroyed = hits.saturating_sub(shield_count) as usize;
            prop_assert_eq!(fleet.len(), before.saturating_sub(destroyed));
        }

        /// Each removal takes a ship whose combat is maximal among survivors
        #[test]
        fn prop_removes_maximal_combat(
            combats in prop::collection::vec(1i64..=10, 1..10),
        ) {
            let ships: Vec<Ship> = combats
                .iter()
                .enumerate()
                .map(|(i, &c)| ship(&format!("S{i}"), c, false))
                .collect();
            let mut fleet: Fleet = ships.into();

            while !fleet.is_empty() {
                let max_combat = fleet.ships.iter().map(|s| s.combat).max().unwrap();
                let before = fleet.roster();
                assign_damage(&mut fleet, 1);
                let after = fleet.roster();

                // Exactly one ship gone, and it carried the maximal combat
                let lost: Vec<&String> =
                    before.iter().filter(|&n| !after.contains(n)).collect();
                prop_assert_eq!(lost.len(), 1);
                let original: usize = lost[0][1..].parse().unwrap();
                prop_assert_eq!(u8::try_from(combats[original]).unwrap(), max_combat);
            }
        }
    }
}

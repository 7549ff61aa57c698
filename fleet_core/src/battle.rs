//! Monte Carlo battle estimation between two fleets
//!
//! Repeatedly resolves independent engagements and aggregates win counts,
//! surviving-roster modes, and full-survival rates into a [`BattleReport`].

use crate::combat::{Engagement, EngagementOutcome};
use crate::fleet::Fleet;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Battle simulation input error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("trial count must be at least 1")]
    ZeroTrials,
}

/// The most frequent surviving roster of one side, among that side's wins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterMode {
    /// Ship names in roster order
    pub ships: Vec<String>,
    /// Occurrence as a percentage of the side's wins
    pub share: f64,
}

/// Aggregated results for one side of the matchup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideReport {
    pub wins: u64,
    /// Wins over trials
    pub win_probability: f64,
    /// `None` when the side never won
    pub most_common_survivors: Option<RosterMode>,
    /// Wins with zero losses, as a percentage of the side's wins
    pub full_survival_rate: f64,
}

/// Win/survivor estimate for a fleet-vs-fleet matchup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleReport {
    pub trials: u64,
    pub draws: u64,
    pub draw_probability: f64,
    pub side_a: SideReport,
    pub side_b: SideReport,
}

impl BattleReport {
    /// Render the report as display text
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        lines.push("Fight Simulation Results:".to_string());
        lines.push("--------------------------".to_string());
        lines.push(format!(
            "Fleet A Wins Probability: {}",
            self.side_a.win_probability
        ));
        lines.push(format!(
            "Fleet B Wins Probability: {}",
            self.side_b.win_probability
        ));
        lines.push(format!("Draw Probability: {}", self.draw_probability));
        lines.push(String::new());
        lines.extend(side_lines("Fleet A", &self.side_a));
        lines.extend(side_lines("Fleet B", &self.side_b));
        lines.join("\n")
    }
}

fn side_lines(label: &str, side: &SideReport) -> Vec<String> {
    let (roster, share) = match &side.most_common_survivors {
        Some(mode) => (mode.ships.join(" "), mode.share),
        None => ("-".to_string(), 0.0),
    };
    vec![
        format!("{label} Most Frequent Remaining Ships: {roster} with {share:.2}% occurrence"),
        format!(
            "{label} Full Survival Rate: {:.2}%",
            side.full_survival_rate
        ),
    ]
}

/// Per-side tallies accumulated over the trial loop
#[derive(Default)]
struct SideTally {
    wins: u64,
    full_survivals: u64,
    rosters: HashMap<Vec<String>, u64>,
}

impl SideTally {
    fn record(&mut self, survivors: &Fleet, original_size: usize) {
        self.wins += 1;
        if survivors.len() == original_size {
            self.full_survivals += 1;
        }
        *self.rosters.entry(survivors.roster()).or_default() += 1;
    }

    fn report(self, trials: u64) -> SideReport {
        // Mode of the surviving rosters; count ties break toward the
        // lexicographically smaller roster so reports are deterministic
        let most_common_survivors = self
            .rosters
            .iter()
            .max_by(|(roster_a, count_a), (roster_b, count_b)| {
                count_a.cmp(count_b).then_with(|| roster_b.cmp(roster_a))
            })
            .map(|(roster, count)| RosterMode {
                ships: roster.clone(),
                share: percent(*count, self.wins),
            });

        SideReport {
            wins: self.wins,
            win_probability: self.wins as f64 / trials as f64,
            most_common_survivors,
            full_survival_rate: percent(self.full_survivals, self.wins),
        }
    }
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Estimate a matchup with a fresh thread-local RNG
pub fn simulate_battle(
    fleet_a: &Fleet,
    fleet_b: &Fleet,
    trials: u64,
) -> Result<BattleReport, SimulationError> {
    let mut rng = rand::thread_rng();
    simulate_battle_with_rng(fleet_a, fleet_b, trials, &mut rng)
}

/// Estimate a matchup with a provided RNG (for deterministic runs)
///
/// Every trial clones fresh working fleets, so the inputs are never mutated
/// and trials are independent.
pub fn simulate_battle_with_rng(
    fleet_a: &Fleet,
    fleet_b: &Fleet,
    trials: u64,
    rng: &mut impl Rng,
) -> Result<BattleReport, SimulationError> {
    if trials == 0 {
        return Err(SimulationError::ZeroTrials);
    }

    let mut tally_a = SideTally::default();
    let mut tally_b = SideTally::default();
    let mut draws = 0u64;

    for _ in 0..trials {
        let result = Engagement::new(fleet_a, fleet_b).resolve(rng);
        match result.outcome {
            EngagementOutcome::AWins => tally_a.record(&result.survivors_a, fleet_a.len()),
            EngagementOutcome::BWins => tally_b.record(&result.survivors_b, fleet_b.len()),
            EngagementOutcome::Draw => draws += 1,
        }
    }

    Ok(BattleReport {
        trials,
        draws,
        draw_probability: draws as f64 / trials as f64,
        side_a: tally_a.report(trials),
        side_b: tally_b.report(trials),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_catalog;
    use crate::ship::ShipSpec;
    use crate::types::ShipClass;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sure_hitter(name: &str) -> Fleet {
        vec![ShipSpec::minimal(name, ShipClass::Cruiser, 1).build().unwrap()].into()
    }

    #[test]
    fn test_outcomes_are_exhaustive_and_exclusive() {
        let catalog = default_catalog();
        let mut rng = StdRng::seed_from_u64(23);

        let a: Fleet = vec![
            catalog.build(ShipClass::Cruiser).unwrap(),
            catalog.build(ShipClass::Cruiser).unwrap(),
        ]
        .into();
        let b: Fleet = vec![catalog.build(ShipClass::Dreadnought).unwrap()].into();

        let report = simulate_battle_with_rng(&a, &b, 2_000, &mut rng).unwrap();
        assert_eq!(
            report.side_a.wins + report.side_b.wins + report.draws,
            report.trials
        );
        let total = report.side_a.win_probability
            + report.side_b.win_probability
            + report.draw_probability;
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_opponent_means_certain_full_survival() {
        let catalog = default_catalog();
        let mut rng = StdRng::seed_from_u64(23);

        let a: Fleet = vec![
            catalog.build(ShipClass::Cruiser).unwrap(),
            catalog.build(ShipClass::Fighter).unwrap(),
        ]
        .into();

        let report = simulate_battle_with_rng(&a, &Fleet::new(), 500, &mut rng).unwrap();
        assert_eq!(report.side_a.wins, 500);
        assert!((report.side_a.win_probability - 1.0).abs() < 1e-12);
        assert!((report.side_a.full_survival_rate - 100.0).abs() < 1e-12);
        assert_eq!(report.side_b.wins, 0);
        assert!(report.side_b.most_common_survivors.is_none());

        let mode = report.side_a.most_common_survivors.unwrap();
        assert_eq!(mode.ships, vec!["Cruiser I", "Fighter I"]);
        assert!((mode.share - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_mirror_sure_hitters_always_draw() {
        let mut rng = StdRng::seed_from_u64(23);
        let report =
            simulate_battle_with_rng(&sure_hitter("A"), &sure_hitter("B"), 300, &mut rng).unwrap();

        assert_eq!(report.draws, 300);
        assert!((report.draw_probability - 1.0).abs() < 1e-12);
        assert_eq!(report.side_a.wins, 0);
        assert_eq!(report.side_b.wins, 0);
    }

    #[test]
    fn test_zero_trials_rejected() {
        let mut rng = StdRng::seed_from_u64(23);
        assert_eq!(
            simulate_battle_with_rng(&Fleet::new(), &Fleet::new(), 0, &mut rng),
            Err(SimulationError::ZeroTrials)
        );
    }

    #[test]
    fn test_same_seed_same_report() {
        let catalog = default_catalog();
        let a: Fleet = vec![
            catalog.build(ShipClass::Cruiser).unwrap(),
            catalog.build(ShipClass::Destroyer).unwrap(),
            catalog.build(ShipClass::Fighter).unwrap(),
        ]
        .into();
        let b: Fleet = vec![
            catalog.build(ShipClass::Flagship).unwrap(),
            catalog.build(ShipClass::Fighter).unwrap(),
        ]
        .into();

        let mut first = StdRng::seed_from_u64(77);
        let mut second = StdRng::seed_from_u64(77);
        let x = simulate_battle_with_rng(&a, &b, 1_000, &mut first).unwrap();
        let y = simulate_battle_with_rng(&a, &b, 1_000, &mut second).unwrap();

        assert_eq!(x, y);
    }

    #[test]
    fn test_bigger_fleet_usually_wins() {
        let catalog = default_catalog();
        let mut rng = StdRng::seed_from_u64(23);

        let a: Fleet = vec![
            catalog.build(ShipClass::Cruiser).unwrap(),
            catalog.build(ShipClass::Cruiser).unwrap(),
        ]
        .into();
        let b: Fleet = vec![catalog.build(ShipClass::Cruiser).unwrap()].into();

        let report = simulate_battle_with_rng(&a, &b, 4_000, &mut rng).unwrap();
        assert!(report.side_a.win_probability > report.side_b.win_probability);
    }

    #[test]
    fn test_summary_layout() {
        let catalog = default_catalog();
        let mut rng = StdRng::seed_from_u64(23);

        let a: Fleet = vec![catalog.build(ShipClass::Cruiser).unwrap()].into();
        let report = simulate_battle_with_rng(&a, &Fleet::new(), 100, &mut rng).unwrap();
        let text = report.summary();

        assert!(text.contains("Fight Simulation Results:"));
        assert!(text.contains("Fleet A Wins Probability: 1"));
        assert!(text.contains("Fleet A Most Frequent Remaining Ships: Cruiser I with 100.00% occurrence"));
        assert!(text.contains("Fleet A Full Survival Rate: 100.00%"));
        assert!(text.contains("Fleet B Most Frequent Remaining Ships: - with 0.00% occurrence"));
    }
}

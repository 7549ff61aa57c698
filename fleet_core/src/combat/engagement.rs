//! Engagement resolution - the round-by-round attrition loop

use super::damage::assign_damage;
use super::dice::roll_hits;
use super::opening::resolve_opening;
use crate::fleet::Fleet;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Terminal state of a resolved engagement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementOutcome {
    /// Fleet A survived, fleet B was destroyed
    AWins,
    /// Fleet B survived, fleet A was destroyed
    BWins,
    /// Simultaneous mutual destruction
    Draw,
}

/// Result of resolving one engagement to a terminal state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementResult {
    pub outcome: EngagementOutcome,
    pub survivors_a: Fleet,
    pub survivors_b: Fleet,
    /// Attrition rounds fought, not counting the opening phase
    pub rounds: u32,
}

/// One battle between two fleets, advanced round by round to a terminal state
///
/// Owns deep copies of the caller's fleets; repeated simulations never mutate
/// caller state. Consumed by [`Engagement::resolve`].
#[derive(Debug, Clone)]
pub struct Engagement {
    fleet_a: Fleet,
    fleet_b: Fleet,
}

impl Engagement {
    pub fn new(fleet_a: &Fleet, fleet_b: &Fleet) -> Self {
        Engagement {
            fleet_a: fleet_a.clone(),
            fleet_b: fleet_b.clone(),
        }
    }

    /// Run the opening phase and the attrition loop until at least one side
    /// is empty
    ///
    /// Both hit totals of a round are rolled from the start-of-round rosters
    /// before either side takes damage. An empty input fleet short-circuits
    /// to the corresponding terminal state with zero rounds fought. The
    /// outcome is a function of the random stream only.
    pub fn resolve(mut self, rng: &mut impl Rng) -> EngagementResult {
        resolve_opening(&mut self.fleet_a, &mut self.fleet_b, rng);

        let mut rounds = 0;
        while !self.fleet_a.is_empty() && !self.fleet_b.is_empty() {
            let hits_a = roll_hits(&self.fleet_a, rng);
            let hits_b = roll_hits(&self.fleet_b, rng);
            assign_damage(&mut self.fleet_b, hits_a);
            assign_damage(&mut self.fleet_a, hits_b);
            rounds += 1;
        }

        // The loop only exits once at least one side is empty
        let outcome = match (self.fleet_a.is_empty(), self.fleet_b.is_empty()) {
            (false, true) => EngagementOutcome::AWins,
            (true, false) => EngagementOutcome::BWins,
            _ => EngagementOutcome::Draw,
        };

        EngagementResult {
            outcome,
            survivors_a: self.fleet_a,
            survivors_b: self.fleet_b,
            rounds,
        }
    }
}

/// Resolve one engagement with a fresh thread-local RNG
pub fn resolve_engagement(fleet_a: &Fleet, fleet_b: &Fleet) -> EngagementResult {
    let mut rng = rand::thread_rng();
    resolve_engagement_with_rng(fleet_a, fleet_b, &mut rng)
}

/// Resolve one engagement with a provided RNG (for deterministic runs)
pub fn resolve_engagement_with_rng(
    fleet_a: &Fleet,
    fleet_b: &Fleet,
    rng: &mut impl Rng,
) -> EngagementResult {
    Engagement::new(fleet_a, fleet_b).resolve(rng)
}

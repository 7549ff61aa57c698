//! Combat resolution - dice, damage assignment, opening phase, round loop

mod damage;
mod dice;
mod engagement;
mod opening;

pub use damage::assign_damage;
pub use dice::{roll_d10, roll_hits};
pub use engagement::{
    resolve_engagement, resolve_engagement_with_rng, Engagement, EngagementOutcome,
    EngagementResult,
};
pub use opening::resolve_opening;

//! fleet_core - Combat resolution and statistics engine for fleet engagements
//!
//! This library provides:
//! - Ship / Fleet: the unit data model with a data-driven archetype catalog
//! - Combat resolution: opening phases and the round-by-round attrition loop
//! - Statistics: Monte Carlo and normal-approximation hit-output estimators
//! - Battle simulation: win/survivor estimates over repeated engagements

pub mod battle;
pub mod combat;
pub mod config;
pub mod fleet;
pub mod prelude;
pub mod ship;
pub mod stats;
pub mod types;

// Re-export core types for convenience
pub use battle::{simulate_battle, simulate_battle_with_rng, BattleReport, SimulationError};
pub use combat::{
    assign_damage, resolve_engagement, resolve_engagement_with_rng, Engagement, EngagementOutcome,
    EngagementResult,
};
pub use config::{default_catalog, Catalog, ConfigError};
pub use fleet::Fleet;
pub use ship::{Ship, ShipError, ShipSpec, UpgradeSpec};
pub use stats::{analyze_fleet, analyze_fleet_with_rng, AnalysisError, FleetAnalysis};
pub use types::ShipClass;

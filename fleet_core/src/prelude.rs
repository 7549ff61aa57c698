//! Prelude module for convenient imports
//!
//! ```rust
//! use fleet_core::prelude::*;
//! ```

// Data model
pub use crate::fleet::Fleet;
pub use crate::ship::{Ship, ShipError, ShipSpec, UpgradeSpec};
pub use crate::types::ShipClass;

// Combat resolution
pub use crate::combat::{
    resolve_engagement, resolve_engagement_with_rng, Engagement, EngagementOutcome,
    EngagementResult,
};

// Statistics
pub use crate::stats::{
    analyze_fleet, analyze_fleet_with_rng, AnalysisError, FleetAnalysis, FleetProfile, FleetReport,
    HitDistribution,
};

// Battle simulation
pub use crate::battle::{simulate_battle, simulate_battle_with_rng, BattleReport, SimulationError};

// Config
pub use crate::config::{default_catalog, Catalog, ConfigError};

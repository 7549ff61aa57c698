//! Fleet analysis reports and their text rendering

use super::estimate::{
    normal_hit_distribution, simulate_hit_distribution_with_rng, AnalysisError, HitDistribution,
};
use crate::fleet::Fleet;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which method produced a report's quantiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimatorKind {
    Simulation,
    Normal,
    TruncatedNormal,
}

impl EstimatorKind {
    fn label(self) -> &'static str {
        match self {
            EstimatorKind::Simulation => "Simulation-based",
            EstimatorKind::Normal => "Normal Approximation",
            EstimatorKind::TruncatedNormal => "Truncated Normal Approximation",
        }
    }
}

/// Non-stochastic aggregates reported alongside every estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetProfile {
    pub cost: f64,
    /// Ship count plus unspent shields
    pub health: usize,
    /// Slowest ship's movement; `None` for an empty fleet, rendered as "-"
    pub movement: Option<u32>,
    pub capacity: u32,
}

impl FleetProfile {
    pub fn of(fleet: &Fleet) -> Self {
        FleetProfile {
            cost: fleet.total_cost(),
            health: fleet.health(),
            movement: fleet.movement(),
            capacity: fleet.total_capacity(),
        }
    }
}

/// One labelled statistics block for a fleet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetReport {
    pub estimator: EstimatorKind,
    pub distribution: HitDistribution,
    pub profile: FleetProfile,
}

const QUANTILE_LABELS: [&str; 9] = [
    "1% Quantile of Hits",
    "10% Quantile of Hits",
    "25% Quantile of Hits",
    "33% Quantile of Hits",
    "50% Quantile of Hits (Median)",
    "66% Quantile of Hits",
    "75% Quantile of Hits",
    "90% Quantile of Hits",
    "99% Quantile of Hits",
];

impl FleetReport {
    /// Render the block as display text
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!("Fleet Statistics ({}):", self.estimator.label()));
        lines.push("----------------".to_string());
        lines.push(format!("Mean Hits: {:.2}", self.distribution.mean));
        lines.push(format!("Variance of Hits: {:.2}", self.distribution.variance));
        lines.push(format!(
            "Standard Deviation of Hits: {:.2}",
            self.distribution.std_dev
        ));
        for (label, value) in QUANTILE_LABELS.iter().zip(self.distribution.quantiles.iter()) {
            lines.push(format!("{label}: {value:.2}"));
        }
        lines.push(String::new());
        lines.push(format!("Fleet Cost: {}", self.profile.cost));
        lines.push(format!(
            "Fleet Health (Number of Ships + Sustain Damage): {}",
            self.profile.health
        ));
        let movement = self
            .profile
            .movement
            .map_or_else(|| "-".to_string(), |m| m.to_string());
        lines.push(format!("Fleet Movement (Lowest Movement Value): {movement}"));
        lines.push(format!(
            "Fleet Capacity (Total Capacity of Ships): {}",
            self.profile.capacity
        ));
        lines.join("\n")
    }
}

/// Combined analysis of one fleet's offensive output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetAnalysis {
    pub simulation: FleetReport,
    pub normal: FleetReport,
    /// Present when the caller asked for the zero-truncated variant
    pub truncated_normal: Option<FleetReport>,
}

impl FleetAnalysis {
    /// Concatenated labelled blocks, ready for the UI to render
    pub fn summary(&self) -> String {
        let mut blocks = vec![self.simulation.summary(), self.normal.summary()];
        if let Some(truncated) = &self.truncated_normal {
            blocks.push(truncated.summary());
        }
        blocks.join("\n\n")
    }
}

/// Analyze one fleet's hit output (thread-local RNG)
pub fn analyze_fleet(
    fleet: &Fleet,
    simulations: u32,
    use_truncated_normal: bool,
) -> Result<FleetAnalysis, AnalysisError> {
    let mut rng = rand::thread_rng();
    analyze_fleet_with_rng(fleet, simulations, use_truncated_normal, &mut rng)
}

/// Analyze one fleet's hit output with a provided RNG
///
/// Produces the simulation-based block, the normal-approximation block, and
/// (when requested) the truncated-normal block, all over the same exact
/// mean and variance.
pub fn analyze_fleet_with_rng(
    fleet: &Fleet,
    simulations: u32,
    use_truncated_normal: bool,
    rng: &mut impl Rng,
) -> Result<FleetAnalysis, AnalysisError> {
    let profile = FleetProfile::of(fleet);

    let simulation = FleetReport {
        estimator: EstimatorKind::Simulation,
        distribution: simulate_hit_distribution_with_rng(fleet, simulations, rng)?,
        profile: profile.clone(),
    };
    let normal = FleetReport {
        estimator: EstimatorKind::Normal,
        distribution: normal_hit_distribution(fleet, false),
        profile: profile.clone(),
    };
    let truncated_normal = use_truncated_normal.then(|| FleetReport {
        estimator: EstimatorKind::TruncatedNormal,
        distribution: normal_hit_distribution(fleet, true),
        profile,
    });

    Ok(FleetAnalysis {
        simulation,
        normal,
        truncated_normal,
    })
}

//! Fleet statistics - hit-output distribution estimators and reports

mod estimate;
mod normal;
mod report;

pub use estimate::{
    hit_mean, hit_variance, normal_hit_distribution, simulate_hit_distribution,
    simulate_hit_distribution_with_rng, AnalysisError, HitDistribution,
};
pub use normal::{normal_cdf, normal_quantile};
pub use report::{
    analyze_fleet, analyze_fleet_with_rng, EstimatorKind, FleetAnalysis, FleetProfile, FleetReport,
};

//! Hit-distribution estimators: Monte Carlo sampling and normal approximation
//!
//! Both estimators share the exact closed-form mean and variance (a sum of
//! independent Binomial contributions, one per ship); they differ only in how
//! the quantiles are obtained.

use super::normal::{normal_cdf, normal_quantile};
use crate::fleet::Fleet;
use crate::types::HIT_QUANTILES;
use rand::Rng;
use rand_distr::{Binomial, Distribution};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fleet analysis input error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("simulation count must be at least 1")]
    ZeroSimulations,
    #[error("{0} carries an invalid hit probability")]
    InvalidHitProbability(String),
}

/// Exact expected hits of one simultaneous firing pass
pub fn hit_mean(fleet: &Fleet) -> f64 {
    fleet
        .ships
        .iter()
        .map(|ship| f64::from(ship.hits) * ship.hit_probability())
        .sum()
}

/// Exact variance of one simultaneous firing pass
pub fn hit_variance(fleet: &Fleet) -> f64 {
    fleet
        .ships
        .iter()
        .map(|ship| {
            let p = ship.hit_probability();
            f64::from(ship.hits) * p * (1.0 - p)
        })
        .sum()
}

/// Characterization of a fleet's hit-count distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitDistribution {
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    /// Values at the nine named quantile levels, floored at zero
    pub quantiles: [f64; 9],
}

/// Estimate the hit distribution by Monte Carlo sampling (thread-local RNG)
pub fn simulate_hit_distribution(
    fleet: &Fleet,
    simulations: u32,
) -> Result<HitDistribution, AnalysisError> {
    let mut rng = rand::thread_rng();
    simulate_hit_distribution_with_rng(fleet, simulations, &mut rng)
}

/// Estimate the hit distribution by Monte Carlo sampling with a provided RNG
///
/// Each sample sums one Binomial(hits, p) draw per ship. Quantiles are
/// empirical, linearly interpolated between order statistics.
pub fn simulate_hit_distribution_with_rng(
    fleet: &Fleet,
    simulations: u32,
    rng: &mut impl Rng,
) -> Result<HitDistribution, AnalysisError> {
    if simulations == 0 {
        return Err(AnalysisError::ZeroSimulations);
    }

    let samplers = fleet
        .ships
        .iter()
        .map(|ship| {
            Binomial::new(u64::from(ship.hits), ship.hit_probability())
                .map_err(|_| AnalysisError::InvalidHitProbability(ship.name.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut samples: Vec<u64> = (0..simulations)
        .map(|_| samplers.iter().map(|dist| dist.sample(rng)).sum())
        .collect();
    samples.sort_unstable();

    let mut quantiles = [0.0; 9];
    for (slot, &level) in quantiles.iter_mut().zip(HIT_QUANTILES.iter()) {
        *slot = percentile(&samples, level).max(0.0);
    }

    let variance = hit_variance(fleet);
    Ok(HitDistribution {
        mean: hit_mean(fleet),
        variance,
        std_dev: variance.sqrt(),
        quantiles,
    })
}

/// Characterize the hit distribution by normal approximation
///
/// Quantiles come from the inverse CDF of Normal(mean, variance), or of the
/// zero-truncated normal when `truncated` is set; either way they are floored
/// at zero. A zero-variance fleet reports every quantile at the mean.
pub fn normal_hit_distribution(fleet: &Fleet, truncated: bool) -> HitDistribution {
    let mean = hit_mean(fleet);
    let variance = hit_variance(fleet);
    let std_dev = variance.sqrt();

    let mut quantiles = [0.0; 9];
    for (slot, &level) in quantiles.iter_mut().zip(HIT_QUANTILES.iter()) {
        let value = if std_dev == 0.0 {
            mean
        } else if truncated {
            // Condition the normal on the non-negative half-line
            let below_zero = normal_cdf((0.0 - mean) / std_dev);
            let adjusted = below_zero + level * (1.0 - below_zero);
            mean + std_dev * normal_quantile(adjusted)
        } else {
            mean + std_dev * normal_quantile(level)
        };
        *slot = value.max(0.0);
    }

    HitDistribution {
        mean,
        variance,
        std_dev,
        quantiles,
    }
}

/// Linearly interpolated empirical percentile of a sorted sample
fn percentile(sorted: &[u64], level: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = level * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;
    sorted[lower] as f64 * (1.0 - weight) + sorted[upper] as f64 * weight
}

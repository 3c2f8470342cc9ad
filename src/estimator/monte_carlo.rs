/*!
 * Monte Carlo Pi Estimator
 */

use super::config::EstimatorConfig;
use super::partition::partition_trials;
use super::pool::run_workers;
use super::sampler::{count_inside, worker_rng};
use crate::core::errors::EstimatorError;
use crate::core::types::{EstimatorResult, TrialCount};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Result of one estimation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Samples that landed inside the unit circle
    pub inside: TrialCount,
    /// Total samples drawn
    pub trials: TrialCount,
    /// Workers that shared the trials
    pub workers: usize,
    /// 4 × inside / trials
    pub value: f64,
}

impl Estimate {
    fn new(inside: TrialCount, trials: TrialCount, workers: usize) -> Self {
        Self {
            inside,
            trials,
            workers,
            value: 4.0 * inside as f64 / trials as f64,
        }
    }

    /// Absolute distance from pi
    pub fn error(&self) -> f64 {
        (self.value - std::f64::consts::PI).abs()
    }
}

/// Parallel pi estimator
///
/// # Example
///
/// ```
/// use sync_primitives::{Estimator, EstimatorConfig};
///
/// let estimator = Estimator::new(EstimatorConfig::new(4).with_seed(1));
/// let estimate = estimator.estimate(100_000).unwrap();
/// assert_eq!(estimate.trials, 100_000);
/// assert!(estimate.error() < 0.1);
/// ```
#[derive(Debug, Clone)]
pub struct Estimator {
    config: EstimatorConfig,
}

impl Estimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Sample on the calling thread
    #[instrument(skip(self), level = "debug")]
    pub fn estimate_sequential(&self, trials: TrialCount) -> EstimatorResult<Estimate> {
        if trials == 0 {
            return Err(EstimatorError::EmptySample);
        }

        let inside = count_inside(&mut worker_rng(self.config.seed, 0), trials);
        let estimate = Estimate::new(inside, trials, 1);
        info!(trials, inside, value = estimate.value, "Sequential estimate");
        Ok(estimate)
    }

    /// Sample across the configured worker pool
    ///
    /// Returns only after every worker has contributed.
    #[instrument(skip(self), fields(workers = self.config.workers), level = "debug")]
    pub fn estimate(&self, trials: TrialCount) -> EstimatorResult<Estimate> {
        let partitions = partition_trials(trials, self.config.workers)?;
        if trials == 0 {
            return Err(EstimatorError::EmptySample);
        }

        let inside = run_workers(&partitions, self.config.seed, self.config.join_timeout)?;
        let estimate = Estimate::new(inside, trials, partitions.len());
        info!(
            trials,
            inside,
            workers = estimate.workers,
            value = estimate.value,
            "Parallel estimate"
        );
        Ok(estimate)
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(EstimatorConfig::default())
    }
}

/// Estimate pi from `trials` samples on the calling thread
pub fn estimate_sequential(trials: TrialCount) -> EstimatorResult<f64> {
    Estimator::new(EstimatorConfig::sequential())
        .estimate_sequential(trials)
        .map(|e| e.value)
}

/// Estimate pi from `trials` samples split across `workers` threads
pub fn estimate_parallel(trials: TrialCount, workers: usize) -> EstimatorResult<f64> {
    Estimator::new(EstimatorConfig::new(workers))
        .estimate(trials)
        .map(|e| e.value)
}

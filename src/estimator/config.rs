/*!
 * Estimator Configuration
 *
 * Runtime configuration for worker count, join policy and seeding
 */

use crate::core::env::env_value;
use std::num::NonZeroUsize;
use std::time::Duration;

/// Worker count override
pub const ENV_WORKERS: &str = "SYNC_ESTIMATOR_WORKERS";
/// Join timeout override, in milliseconds
pub const ENV_TIMEOUT_MS: &str = "SYNC_ESTIMATOR_TIMEOUT_MS";
/// Base seed override
pub const ENV_SEED: &str = "SYNC_ESTIMATOR_SEED";

/// Estimator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Number of sampling workers
    pub workers: usize,
    /// Maximum time to wait for all workers; `None` blocks until done.
    /// Exceeding it fails the estimate outright.
    pub join_timeout: Option<Duration>,
    /// Base seed for reproducible runs; `None` seeds each worker from entropy
    pub seed: Option<u64>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            workers: available_workers(),
            join_timeout: None,
            seed: None,
        }
    }
}

impl EstimatorConfig {
    /// Configuration with an explicit worker count
    pub const fn new(workers: usize) -> Self {
        Self {
            workers,
            join_timeout: None,
            seed: None,
        }
    }

    /// Single worker
    pub const fn sequential() -> Self {
        Self::new(1)
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_join_timeout(mut self, timeout: Duration) -> Self {
        self.join_timeout = Some(timeout);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Defaults overridden by environment variables
    ///
    /// - `SYNC_ESTIMATOR_WORKERS`: worker count
    /// - `SYNC_ESTIMATOR_TIMEOUT_MS`: join timeout in milliseconds
    /// - `SYNC_ESTIMATOR_SEED`: base seed
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(workers) = env_value::<usize>(ENV_WORKERS) {
            config.workers = workers;
        }
        if let Some(ms) = env_value::<u64>(ENV_TIMEOUT_MS) {
            config.join_timeout = Some(Duration::from_millis(ms));
        }
        if let Some(seed) = env_value::<u64>(ENV_SEED) {
            config.seed = Some(seed);
        }

        config
    }
}

/// Hardware parallelism, falling back to one worker
pub fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_hardware_parallelism() {
        let config = EstimatorConfig::default();
        assert!(config.workers >= 1);
        assert_eq!(config.workers, available_workers());
        assert_eq!(config.join_timeout, None);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builders() {
        let config = EstimatorConfig::sequential()
            .with_workers(8)
            .with_join_timeout(Duration::from_secs(60))
            .with_seed(11);

        assert_eq!(config.workers, 8);
        assert_eq!(config.join_timeout, Some(Duration::from_secs(60)));
        assert_eq!(config.seed, Some(11));
    }
}

/*!
 * Sync Primitives Library
 * Deadlock-free account transfers and parallel Monte Carlo estimation
 */

pub mod account;
pub mod core;
pub mod estimator;
pub mod monitoring;

// Re-exports
pub use account::{Account, AccountRegistry, AccountSnapshot};
pub use core::errors::{AccountError, EstimatorError, SyncError};
pub use core::types::{AccountId, Balance, TrialCount};
pub use estimator::{estimate_parallel, estimate_sequential, Estimate, Estimator, EstimatorConfig};
pub use monitoring::init_tracing;

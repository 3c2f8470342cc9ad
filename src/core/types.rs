/*!
 * Core Types
 * Common types used across the crate
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account identity, used for lock ordering and lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub u32);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AccountId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Signed balance; overdrafts are representable
pub type Balance = i64;

/// Number of Monte Carlo trials
pub type TrialCount = u64;

/// Result type for account registry operations
pub type AccountResult<T> = Result<T, super::errors::AccountError>;

/// Result type for estimator operations
pub type EstimatorResult<T> = Result<T, super::errors::EstimatorError>;

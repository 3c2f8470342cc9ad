/*!
 * Trial Partitioning
 */

use crate::core::errors::EstimatorError;
use crate::core::types::{EstimatorResult, TrialCount};

/// Split `trials` across `workers`
///
/// The first `workers - 1` chunks get `trials / workers`; the last chunk
/// takes the remainder. Chunks always sum to `trials`, and some may be zero
/// when there are more workers than trials.
pub fn partition_trials(trials: TrialCount, workers: usize) -> EstimatorResult<Vec<TrialCount>> {
    if workers == 0 {
        return Err(EstimatorError::NoWorkers);
    }

    let per_worker = trials / workers as TrialCount;
    let last = trials - per_worker * (workers as TrialCount - 1);

    let mut chunks = vec![per_worker; workers - 1];
    chunks.push(last);
    Ok(chunks)
}

/*!
 * Sampling Worker Pool
 *
 * One OS thread per partition. Each worker owns its RNG and local count,
 * adds the count into a shared atomic once, then signals completion.
 */

use super::sampler::{count_inside, worker_rng};
use crate::core::errors::EstimatorError;
use crate::core::types::{EstimatorResult, TrialCount};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Run one worker per partition and return the summed inside count
///
/// Blocks until every worker has finished. With a `join_timeout`, running
/// past the deadline is an error and the partial aggregate is dropped;
/// workers still running are left detached.
pub(crate) fn run_workers(
    partitions: &[TrialCount],
    seed: Option<u64>,
    join_timeout: Option<Duration>,
) -> EstimatorResult<TrialCount> {
    let aggregate = Arc::new(AtomicU64::new(0));
    let (done_tx, done_rx) = flume::unbounded::<usize>();
    let mut handles: Vec<JoinHandle<()>> = Vec::with_capacity(partitions.len());

    for (worker, &trials) in partitions.iter().enumerate() {
        let aggregate = Arc::clone(&aggregate);
        let done = done_tx.clone();

        let handle = thread::Builder::new()
            .name(format!("estimator-{}", worker))
            .spawn(move || {
                debug!(worker, trials, "Sampling worker started");
                let mut rng = worker_rng(seed, worker);
                let inside = count_inside(&mut rng, trials);
                aggregate.fetch_add(inside, Ordering::Relaxed);
                debug!(worker, inside, "Sampling worker finished");
                // Receiver may be gone after a timeout
                done.send(worker).ok();
            })
            .map_err(|e| EstimatorError::SpawnFailed {
                worker,
                reason: e.to_string(),
            })?;

        handles.push(handle);
    }
    drop(done_tx);

    if let Some(timeout) = join_timeout {
        await_completion(&done_rx, partitions.len(), timeout)?;
    }

    // Every worker has either reported or exited; joins do not block long
    for (worker, handle) in handles.into_iter().enumerate() {
        if handle.join().is_err() {
            error!(worker, "Sampling worker panicked");
            return Err(EstimatorError::WorkerPanicked { worker });
        }
    }

    // Joins order all worker writes before this load
    Ok(aggregate.load(Ordering::Relaxed))
}

fn await_completion(
    done: &flume::Receiver<usize>,
    workers: usize,
    timeout: Duration,
) -> EstimatorResult<()> {
    let deadline = Instant::now() + timeout;
    let mut finished = 0;

    while finished < workers {
        match done.recv_deadline(deadline) {
            Ok(_) => finished += 1,
            Err(flume::RecvTimeoutError::Timeout) => {
                error!(?timeout, finished, workers, "Sampling workers timed out");
                return Err(EstimatorError::JoinTimeout {
                    timeout,
                    finished,
                    workers,
                });
            }
            // All senders dropped: remaining workers died before reporting
            Err(flume::RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::partition_trials;

    #[test]
    fn test_aggregate_matches_worker_counts() {
        let partitions = partition_trials(40_000, 4).unwrap();
        let total = run_workers(&partitions, Some(5), None).unwrap();

        let expected: u64 = partitions
            .iter()
            .enumerate()
            .map(|(worker, &trials)| count_inside(&mut worker_rng(Some(5), worker), trials))
            .sum();

        assert_eq!(total, expected);
    }

    #[test]
    fn test_empty_partitions() {
        let total = run_workers(&[0, 0, 0], None, None).unwrap();
        assert_eq!(total, 0);
    }

    #[test]
    fn test_timeout_is_fatal() {
        let partitions = partition_trials(1_000_000, 1).unwrap();
        let err = run_workers(&partitions, Some(1), Some(Duration::ZERO)).unwrap_err();

        assert!(matches!(
            err,
            EstimatorError::JoinTimeout {
                finished: 0,
                workers: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_generous_timeout_completes() {
        let partitions = partition_trials(10_000, 2).unwrap();
        let total = run_workers(&partitions, Some(9), Some(Duration::from_secs(30))).unwrap();
        assert!(total > 0 && total <= 10_000);
    }
}

/*!
 * Sync Primitives Demo
 *
 * Times sequential vs parallel pi estimation, then runs a contended
 * transfer workload and checks balance conservation.
 */

use miette::IntoDiagnostic;
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use sync_primitives::core::env::env_value;
use sync_primitives::{init_tracing, AccountRegistry, Estimator, EstimatorConfig};
use tracing::{info, warn};

const ENV_TRIALS: &str = "SYNC_DEMO_TRIALS";
const DEFAULT_TRIALS: u64 = 50_000_000;
const TRANSFER_THREADS: usize = 8;
const TRANSFERS_PER_THREAD: usize = 100_000;

fn main() -> miette::Result<()> {
    init_tracing();

    let trials = env_value::<u64>(ENV_TRIALS).unwrap_or(DEFAULT_TRIALS);

    let config = EstimatorConfig::from_env();
    info!(trials, workers = config.workers, "Estimating pi");
    let estimator = Estimator::new(config);

    let start = Instant::now();
    let sequential = estimator.estimate_sequential(trials)?;
    info!(
        value = sequential.value,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Single-threaded estimate"
    );

    let start = Instant::now();
    let parallel = estimator.estimate(trials)?;
    info!(
        value = parallel.value,
        workers = parallel.workers,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Multi-threaded estimate"
    );

    run_transfers()?;
    Ok(())
}

fn run_transfers() -> miette::Result<()> {
    let registry = AccountRegistry::new();
    let a = registry.open(1_000)?;
    let b = registry.open(1_000)?;
    let before = registry.total_balance();

    let start = Instant::now();
    let handles: Vec<_> = (0..TRANSFER_THREADS)
        .map(|i| {
            let (from, to) = if i % 2 == 0 {
                (Arc::clone(&a), Arc::clone(&b))
            } else {
                (Arc::clone(&b), Arc::clone(&a))
            };
            thread::Builder::new()
                .name(format!("transfer-{}", i))
                .spawn(move || {
                    for _ in 0..TRANSFERS_PER_THREAD {
                        from.transfer(&to, 1);
                    }
                })
                .into_diagnostic()
        })
        .collect::<miette::Result<_>>()?;

    for handle in handles {
        if handle.join().is_err() {
            warn!("Transfer thread panicked");
        }
    }

    let after = registry.total_balance();
    info!(
        a = a.balance(),
        b = b.balance(),
        before,
        after,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Opposing transfers finished"
    );

    if before != after {
        return Err(miette::miette!("balance not conserved: {} -> {}", before, after));
    }
    Ok(())
}

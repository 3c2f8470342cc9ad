/*!
 * Monte Carlo Estimation
 *
 * Estimates pi by sampling points in the square [-1, 1)² and counting those
 * inside the unit circle. The inside/total ratio approaches pi/4.
 *
 * # Architecture
 *
 * - `partition`: splits the trial count across workers without loss
 * - `sampler`: the trial loop and per-worker RNG construction
 * - `pool`: fixed worker set, atomic aggregate, completion barrier
 * - `monte_carlo`: the `Estimator` front door and free functions
 *
 * Workers never share an RNG. The only shared state is one `AtomicU64`
 * that each worker adds its local count into exactly once.
 */

mod config;
mod monte_carlo;
mod partition;
mod pool;
mod sampler;

pub use config::{available_workers, EstimatorConfig};
pub use monte_carlo::{estimate_parallel, estimate_sequential, Estimate, Estimator};
pub use partition::partition_trials;
pub use sampler::{count_inside, worker_rng};

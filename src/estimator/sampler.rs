/*!
 * Trial Sampling
 * Unit-circle hit counting with worker-private random sources
 */

use crate::core::types::TrialCount;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build the random source for one worker
///
/// Seeded runs give each worker its own derived stream, so results are
/// reproducible for a fixed seed and worker count. Unseeded workers draw
/// from OS entropy.
pub fn worker_rng(seed: Option<u64>, worker: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(worker as u64)),
        None => StdRng::from_entropy(),
    }
}

/// Run `trials` samples and count points with x² + y² ≤ 1
///
/// Coordinates are uniform in [-1, 1).
#[inline]
pub fn count_inside<R: Rng>(rng: &mut R, trials: TrialCount) -> TrialCount {
    let mut inside: TrialCount = 0;
    for _ in 0..trials {
        let x: f64 = rng.gen_range(-1.0..1.0);
        let y: f64 = rng.gen_range(-1.0..1.0);
        if x * x + y * y <= 1.0 {
            inside += 1;
        }
    }
    inside
}

/*!
 * Estimator Benchmarks
 *
 * Scaling of the parallel estimator with worker count
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sync_primitives::{Estimator, EstimatorConfig};

const TRIALS: u64 = 2_000_000;

fn bench_worker_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimator_workers");
    group.throughput(Throughput::Elements(TRIALS));
    group.sample_size(10);

    group.bench_function("sequential", |b| {
        let estimator = Estimator::new(EstimatorConfig::sequential().with_seed(1));
        b.iter(|| estimator.estimate_sequential(black_box(TRIALS)).unwrap());
    });

    for workers in [1, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &workers| {
            let estimator = Estimator::new(EstimatorConfig::new(workers).with_seed(1));
            b.iter(|| estimator.estimate(black_box(TRIALS)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_worker_scaling);
criterion_main!(benches);

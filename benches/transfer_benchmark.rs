/*!
 * Transfer Benchmarks
 *
 * Uncontended vs contended pairwise transfers
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use std::thread;
use sync_primitives::{Account, AccountId};

fn bench_uncontended(c: &mut Criterion) {
    let a = Account::new(AccountId(1), 0);
    let b = Account::new(AccountId(2), 0);

    c.bench_function("transfer_uncontended", |bench| {
        bench.iter(|| a.transfer(&b, black_box(1)));
    });

    c.bench_function("deposit_uncontended", |bench| {
        bench.iter(|| a.deposit(black_box(1)));
    });
}

fn bench_opposing(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer_opposing");

    for threads in [2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |bench, &threads| {
            bench.iter(|| {
                let a = Arc::new(Account::new(AccountId(1), 0));
                let b = Arc::new(Account::new(AccountId(2), 0));

                let handles: Vec<_> = (0..threads)
                    .map(|i| {
                        let a = a.clone();
                        let b = b.clone();
                        thread::spawn(move || {
                            for _ in 0..1_000 {
                                if i % 2 == 0 {
                                    a.transfer(&b, 1);
                                } else {
                                    b.transfer(&a, 1);
                                }
                            }
                        })
                    })
                    .collect();

                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_uncontended, bench_opposing);
criterion_main!(benches);

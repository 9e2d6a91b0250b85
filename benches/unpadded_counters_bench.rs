use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::sync::atomic::{AtomicU64, Ordering};

const WORKERS: usize = 4;
const INCREMENTS: u64 = 100_000;

// Baseline: the same counters packed into one cache line.
fn bench_unpadded_counters(c: &mut Criterion) {
    let counters: [AtomicU64; WORKERS] = Default::default();

    let mut group = c.benchmark_group("counters/unpadded");
    group.throughput(Throughput::Elements(WORKERS as u64 * INCREMENTS));
    group.bench_function("fetch_add_own_slot", |b| {
        b.iter(|| {
            std::thread::scope(|scope| {
                for counter in &counters {
                    scope.spawn(move || {
                        for _ in 0..INCREMENTS {
                            counter.fetch_add(1, Ordering::Relaxed);
                        }
                    });
                }
            });
        });
    });

    group.finish();
    std::hint::black_box(counters[0].load(Ordering::Relaxed));
}

criterion_group!(benches, bench_unpadded_counters);
criterion_main!(benches);

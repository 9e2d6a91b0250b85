use cache_aligned::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

const WORKERS: usize = 4;
const INCREMENTS: u64 = 10_000_000;

fn main() {
    let counters: StaticCacheAlignedVector<AtomicU64, WORKERS> = StaticCacheAlignedVector::new();

    std::thread::scope(|scope| {
        for worker in 0..counters.size() {
            let counters = &counters;
            scope.spawn(move || {
                let counter = &counters[worker];
                for _ in 0..INCREMENTS {
                    counter.fetch_add(1, Ordering::Relaxed);
                }
            });
        }
    });

    let mut total = 0;
    for worker in 0..counters.size() {
        let value = counters[worker].load(Ordering::Relaxed);
        println!("worker {}: {}", worker, value);
        total += value;
    }
    println!("total: {} ({} bytes per slot)", total, CACHE_LINE_SIZE);
}

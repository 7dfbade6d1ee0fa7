//! Benchmark for AvlTreeMap vs standard BTreeMap.
//!
//! Also includes the unbalanced TreeMap on shuffled keys, where it is not
//! degenerate, to show the cost of AVL bookkeeping.

use avlmap::map::{AvlTreeMap, TreeMap, Unbalanced};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeMap;
use std::hint::black_box;

/// Deterministic permutation of `0..size` (multiplicative stride).
fn shuffled_keys(size: i32) -> Vec<i32> {
    (0..size).map(|index| (index * 7919) % size).collect()
}

// =============================================================================
// put Benchmark
// =============================================================================

fn benchmark_put(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("put");

    for size in [100, 1000, 10000] {
        let keys = shuffled_keys(size);

        group.bench_with_input(BenchmarkId::new("AvlTreeMap", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut map = AvlTreeMap::new();
                for &key in keys {
                    map.put(black_box(key), black_box(key * 2)).unwrap();
                }
                black_box(map)
            });
        });

        group.bench_with_input(BenchmarkId::new("Unbalanced", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut map: TreeMap<i32, i32, Unbalanced> = TreeMap::new();
                for &key in keys {
                    map.put(black_box(key), black_box(key * 2)).unwrap();
                }
                black_box(map)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut map = BTreeMap::new();
                for &key in keys {
                    map.insert(black_box(key), black_box(key * 2));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Ascending put Benchmark
// =============================================================================

fn benchmark_put_ascending(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("put_ascending");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("AvlTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = AvlTreeMap::new();
                for key in 0..size {
                    map.put(black_box(key), black_box(key)).unwrap();
                }
                black_box(map)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = BTreeMap::new();
                for key in 0..size {
                    map.insert(black_box(key), black_box(key));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// peek Benchmark
// =============================================================================

fn benchmark_peek(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("peek");

    for size in [100, 1000, 10000] {
        let avl_map: AvlTreeMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();
        let standard_map: BTreeMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();

        group.bench_with_input(BenchmarkId::new("AvlTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0_i64;
                for key in 0..size {
                    if let Ok(Some(&value)) = avl_map.peek(&black_box(key)) {
                        sum += i64::from(value);
                    }
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0_i64;
                for key in 0..size {
                    if let Some(&value) = standard_map.get(&black_box(key)) {
                        sum += i64::from(value);
                    }
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// remove Benchmark
// =============================================================================

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in [100, 1000, 10000] {
        let keys = shuffled_keys(size);
        let avl_map: AvlTreeMap<i32, i32> = (0..size).map(|index| (index, index)).collect();
        let standard_map: BTreeMap<i32, i32> = (0..size).map(|index| (index, index)).collect();

        group.bench_with_input(BenchmarkId::new("AvlTreeMap", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut map = avl_map.clone();
                for key in keys {
                    black_box(map.remove(black_box(key)).unwrap());
                }
                black_box(map)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut map = standard_map.clone();
                for key in keys {
                    black_box(map.remove(black_box(key)));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// sub_map Benchmark
// =============================================================================

fn benchmark_sub_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sub_map");

    for size in [1000, 10000] {
        let avl_map: AvlTreeMap<i32, i32> = (0..size).map(|index| (index, index)).collect();
        let standard_map: BTreeMap<i32, i32> = (0..size).map(|index| (index, index)).collect();
        let (from, to) = (size / 4, size / 2);

        group.bench_function(BenchmarkId::new("AvlTreeMap", size), |bencher| {
            bencher.iter(|| black_box(avl_map.sub_map(&black_box(from), &black_box(to)).unwrap()));
        });

        group.bench_function(BenchmarkId::new("BTreeMap", size), |bencher| {
            bencher.iter(|| {
                black_box(
                    standard_map
                        .range(black_box(from)..black_box(to))
                        .collect::<Vec<_>>(),
                )
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_put,
    benchmark_put_ascending,
    benchmark_peek,
    benchmark_remove,
    benchmark_sub_map
);

criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand::rngs::StdRng;
use rbindex::{BinarySearchTree, RedBlackTree};
use std::collections::BTreeSet;

const SEED: u64 = 42;

fn random_keys(n: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..n).map(|_| rng.gen_range(0..(n as u64) * 4)).collect()
}

fn insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [1_000usize, 10_000, 100_000] {
        let keys = random_keys(size);

        group.bench_with_input(BenchmarkId::new("red_black", size), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = RedBlackTree::with_capacity(keys.len());
                for &k in keys {
                    tree.insert(black_box(k));
                }
                black_box(tree);
            })
        });

        group.bench_with_input(BenchmarkId::new("unbalanced", size), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = BinarySearchTree::with_capacity(keys.len());
                for &k in keys {
                    tree.insert(black_box(k));
                }
                black_box(tree);
            })
        });

        group.bench_with_input(BenchmarkId::new("std_btreeset", size), &keys, |b, keys| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for &k in keys {
                    set.insert(black_box(k));
                }
                black_box(set);
            })
        });
    }

    group.finish();
}

fn sequential_insert_benchmark(c: &mut Criterion) {
    // Ascending keys are the worst case for the plain tree, so only the
    // balanced policy is measured at scale.
    c.bench_function("red_black_sequential_100k", |b| {
        b.iter(|| {
            let tree: RedBlackTree<u64> = (0..100_000).collect();
            black_box(tree);
        })
    });
}

fn range_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded_range");
    let keys = random_keys(100_000);
    let tree: RedBlackTree<u64> = keys.iter().copied().collect();
    let set: BTreeSet<u64> = keys.iter().copied().collect();
    let mut rng = StdRng::seed_from_u64(SEED + 1);

    for width in [10u64, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("red_black", width), &width, |b, &width| {
            b.iter(|| {
                let start = rng.gen_range(0..400_000u64);
                let count = tree.bounded(Some(start), Some(start + width)).count();
                black_box(count);
            })
        });

        group.bench_with_input(BenchmarkId::new("std_btreeset", width), &width, |b, &width| {
            b.iter(|| {
                let start = rng.gen_range(0..400_000u64);
                let count = set.range(start..=start + width).count();
                black_box(count);
            })
        });
    }

    group.bench_function("red_black_creation", |b| {
        b.iter(|| {
            let iter = tree.bounded(Some(black_box(200_000)), Some(black_box(200_010)));
            black_box(iter);
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    insert_benchmark,
    sequential_insert_benchmark,
    range_benchmark
);
criterion_main!(benches);

//! Benchmark for the combinators vs standard iterator adaptors.
//!
//! Compares `fold`, `map` and the linked forms against the equivalent
//! `Iterator` code over the same data.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lambdacraft::combinator::{fold, fold_s, map, map_s, release};
use lambdacraft::sequence::Linked;
use std::hint::black_box;

#[derive(Linked)]
struct Node {
    data: u64,
    #[link]
    next: Option<Box<Node>>,
}

fn build_chain(size: u64) -> Option<Box<Node>> {
    (0..size)
        .rev()
        .fold(None, |next, data| Some(Box::new(Node { data, next })))
}

// =============================================================================
// fold Benchmark
// =============================================================================

fn benchmark_fold(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fold");

    for size in [100u64, 1000, 10000] {
        let values: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("fold", size), &values, |bencher, values| {
            bencher.iter(|| {
                black_box(fold(black_box(values), |total: u64, value| total + value, 0).unwrap())
            });
        });

        group.bench_with_input(
            BenchmarkId::new("Iterator::fold", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    black_box(
                        black_box(values)
                            .iter()
                            .fold(0u64, |total, value| total + value),
                    )
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// map Benchmark
// =============================================================================

fn benchmark_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map");

    for size in [100u64, 1000, 10000] {
        let values: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("map", size), &values, |bencher, values| {
            let mut destination = vec![0u64; values.len()];
            bencher.iter(|| {
                map(black_box(values), |value| value * 3, &mut destination).unwrap();
                black_box(destination.last().copied())
            });
        });

        group.bench_with_input(
            BenchmarkId::new("Iterator::map", size),
            &values,
            |bencher, values| {
                let mut destination = vec![0u64; values.len()];
                bencher.iter(|| {
                    for (slot, value) in destination.iter_mut().zip(black_box(values)) {
                        *slot = value * 3;
                    }
                    black_box(destination.last().copied())
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Linked Benchmarks
// =============================================================================

fn benchmark_fold_s(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fold_s");

    for size in [100u64, 1000, 10000] {
        let head = build_chain(size);

        group.bench_with_input(BenchmarkId::new("fold_s", size), &head, |bencher, head| {
            bencher.iter(|| {
                black_box(
                    fold_s(
                        head.as_deref(),
                        |node| node.next.as_deref(),
                        |total, node| total + node.data,
                        0,
                    )
                    .unwrap(),
                )
            });
        });

        group.bench_with_input(
            BenchmarkId::new("while_let", size),
            &head,
            |bencher, head| {
                bencher.iter(|| {
                    let mut total = 0u64;
                    let mut cursor = head.as_deref();
                    while let Some(node) = cursor {
                        total += node.data;
                        cursor = node.next.as_deref();
                    }
                    black_box(total)
                });
            },
        );

        release(head).unwrap();
    }

    group.finish();
}

fn benchmark_map_s(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_s");

    for size in [16u64, 1000, 100_000] {
        let head = build_chain(size);

        group.bench_with_input(BenchmarkId::new("map_s", size), &head, |bencher, head| {
            bencher.iter(|| {
                let mapped = map_s(
                    head.as_deref(),
                    |node| node.next.as_deref(),
                    |node, next| {
                        Box::new(Node {
                            data: node.data + 1,
                            next,
                        })
                    },
                )
                .unwrap();
                black_box(release(mapped).unwrap())
            });
        });

        release(head).unwrap();
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_fold,
    benchmark_map,
    benchmark_fold_s,
    benchmark_map_s
);

criterion_main!(benches);

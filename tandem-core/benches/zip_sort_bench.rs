//! Benchmarks for sorting and heap operations on zipped sequences.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tandem_core::prelude::*;

fn columns(len: usize) -> (Vec<i32>, Vec<i32>) {
    let mut rng = StdRng::seed_from_u64(5489);
    let dist = Uniform::new_inclusive(1, 25);
    (0..len).map(|_| (dist.sample(&mut rng), dist.sample(&mut rng))).unzip()
}

fn benchmark_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in [100, 1_000, 10_000].iter() {
        let data = columns(*size);

        group.bench_with_input(BenchmarkId::new("zip", size), &data, |b, data| {
            b.iter_batched(
                || data.clone(),
                |(mut x, mut y)| {
                    sort(&mut zip((&mut x, &mut y)));
                    black_box((x, y))
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("quicksort", size), &data, |b, data| {
            b.iter_batched(
                || data.clone(),
                |(mut x, mut y)| {
                    quicksort(&mut zip((&mut x, &mut y)));
                    black_box((x, y))
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("materialized", size), &data, |b, data| {
            b.iter_batched(
                || data.clone(),
                |(x, y)| {
                    let mut rows: Vec<(i32, i32)> = x.into_iter().zip(y).collect();
                    rows.sort_unstable();
                    let (x, y): (Vec<i32>, Vec<i32>) = rows.into_iter().unzip();
                    black_box((x, y))
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_sort_first_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_first_field");
    let data = columns(10_000);

    group.bench_function("less_first", |b| {
        b.iter_batched(
            || data.clone(),
            |(mut x, mut y)| {
                sort_by(&mut zip((&mut x, &mut y)), less_first);
                black_box((x, y))
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn benchmark_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap");
    let data = columns(10_000);

    group.bench_function("make_and_sort_heap", |b| {
        b.iter_batched(
            || data.clone(),
            |(mut x, mut y)| {
                let mut z = zip((&mut x, &mut y));
                make_heap(&mut z);
                sort_heap(&mut z);
                black_box((x, y))
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_sort,
    benchmark_sort_first_field,
    benchmark_heap
);
criterion_main!(benches);

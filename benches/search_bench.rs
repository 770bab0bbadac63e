//! Benchmarks for bounded search against the standard library.
//!
//! The branded search should cost the same as `slice::binary_search`: the
//! capability discipline is meant to be free at runtime.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lightcap::testing::even_numbers;
use lightcap::{search, NonEmpty, SortedVec};

/// Array sizes to benchmark
const SIZES: &[usize] = &[16, 1_024, 65_536, 1_048_576];

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for &size in SIZES {
        let data = even_numbers(size);
        // Every other key misses.
        let keys: Vec<u64> = (0..256u64).map(|i| (i * 7919) % (2 * size as u64)).collect();
        group.throughput(Throughput::Elements(keys.len() as u64));

        group.bench_with_input(BenchmarkId::new("lightcap", size), &data, |b, data| {
            b.iter(|| {
                for key in &keys {
                    black_box(search(data, black_box(key)));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("std", size), &data, |b, data| {
            b.iter(|| {
                for key in &keys {
                    black_box(data.binary_search(black_box(key)).ok());
                }
            });
        });
    }

    group.finish();
}

fn bench_sorted_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorted_vec");

    for &size in &SIZES[..3] {
        let mut data = even_numbers(size);
        data.reverse();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("from_slice", size), &data, |b, data| {
            b.iter(|| black_box(SortedVec::from_slice(data)));
        });
    }

    group.finish();
}

fn bench_head_tail(c: &mut Criterion) {
    let data = even_numbers(1_024);

    c.bench_function("nonempty/head_tail", |b| {
        b.iter(|| {
            let ne = NonEmpty::from_slice(black_box(&data)).unwrap();
            black_box((ne.head(), ne.tail().len()))
        });
    });

    c.bench_function("std/split_first", |b| {
        b.iter(|| {
            let (head, tail) = black_box(&data).split_first().unwrap();
            black_box((head, tail.len()))
        });
    });
}

criterion_group!(
    benches,
    bench_search,
    bench_sorted_construction,
    bench_head_tail
);
criterion_main!(benches);

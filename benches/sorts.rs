use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Exp};

use searchsort::{
    bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, radix_sort, selection_sort,
};

const N: usize = 4096;
const SEED: u64 = 12345;

fn shuffled(n: usize) -> Vec<i64> {
    let mut data: Vec<i64> = (0..n as i64).collect();
    data.shuffle(&mut StdRng::seed_from_u64(SEED));
    data
}

fn exponential(n: usize) -> Vec<i64> {
    let exp = Exp::new(0.0005).unwrap();
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..n).map(|_| exp.sample(&mut rng) as i64).collect()
}

fn bench_uniform(c: &mut Criterion) {
    let base = shuffled(N);
    let mut group = c.benchmark_group("uniform");
    group.bench_function("bubble", |b| {
        b.iter(|| {
            let mut data = base.clone();
            bubble_sort(black_box(&mut data[..]));
        })
    });
    group.bench_function("insertion", |b| {
        b.iter(|| {
            let mut data = base.clone();
            insertion_sort(black_box(&mut data[..]));
        })
    });
    group.bench_function("selection", |b| {
        b.iter(|| {
            let mut data = base.clone();
            selection_sort(black_box(&mut data[..]));
        })
    });
    group.bench_function("quick", |b| {
        b.iter(|| {
            let mut data = base.clone();
            quick_sort(black_box(&mut data[..]));
        })
    });
    group.bench_function("merge", |b| {
        b.iter(|| {
            let mut data = base.clone();
            merge_sort(black_box(&mut data[..]));
        })
    });
    group.bench_function("heap", |b| {
        b.iter(|| {
            let mut data = base.clone();
            heap_sort(black_box(&mut data[..]));
        })
    });
    group.bench_function("radix", |b| {
        b.iter(|| {
            let mut data = base.clone();
            radix_sort(black_box(&mut data[..]));
        })
    });
    group.bench_function("std_unstable", |b| {
        b.iter(|| {
            let mut data = base.clone();
            black_box(&mut data[..]).sort_unstable();
        })
    });
    group.finish();
}

fn bench_exponential(c: &mut Criterion) {
    let base = exponential(N);
    let mut group = c.benchmark_group("exponential");
    group.bench_function("quick", |b| {
        b.iter(|| {
            let mut data = base.clone();
            quick_sort(black_box(&mut data[..]));
        })
    });
    group.bench_function("merge", |b| {
        b.iter(|| {
            let mut data = base.clone();
            merge_sort(black_box(&mut data[..]));
        })
    });
    group.bench_function("heap", |b| {
        b.iter(|| {
            let mut data = base.clone();
            heap_sort(black_box(&mut data[..]));
        })
    });
    group.bench_function("radix", |b| {
        b.iter(|| {
            let mut data = base.clone();
            radix_sort(black_box(&mut data[..]));
        })
    });
    group.bench_function("std_unstable", |b| {
        b.iter(|| {
            let mut data = base.clone();
            black_box(&mut data[..]).sort_unstable();
        })
    });
    group.finish();
}

criterion_group!(name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_uniform, bench_exponential);
criterion_main!(benches);

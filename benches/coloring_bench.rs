//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ancestral_coloring::verify::verify;
use ancestral_coloring::*;

fn benchmark_balanced_coloring(c: &mut Criterion) {
    let mut group = c.benchmark_group("color_splitting");
    group.sample_size(20);

    for height in [12u32, 16, 18] {
        let sequence = balanced_sequence(height);
        group.bench_with_input(BenchmarkId::new("balanced", height), &sequence, |b, seq| {
            b.iter(|| color_splitting(black_box(seq)).expect("balanced sequence is feasible"));
        });
    }
    group.finish();
}

fn benchmark_split(c: &mut Criterion) {
    let sequence = balanced_sequence(40);
    c.bench_function("split_h=40", |b| {
        b.iter(|| split(black_box(&sequence)));
    });
}

fn benchmark_verify(c: &mut Criterion) {
    let coloring = color_splitting(&balanced_sequence(16)).expect("balanced sequence is feasible");
    c.bench_function("verify_h=16", |b| {
        b.iter(|| verify(black_box(&coloring), true));
    });
}

criterion_group!(benches, benchmark_balanced_coloring, benchmark_split, benchmark_verify);
criterion_main!(benches);

//! Bit field operation benchmarks
//!
//! # Scenarios
//!
//! 1. **Bit access**: `set_bit` / `get_bit` latency at random indices
//! 2. **Algebra**: `or` / `and` / `not` across sizes, equal and mixed lengths
//! 3. **Text I/O**: `Display` and `read_from` throughput
use bitfield_set::BitField;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

mod common;
use common::*;

fn bench_bit_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_access");

    for &size in SIZES {
        let indices = random_indices(1_024, size);

        group.throughput(Throughput::Elements(indices.len() as u64));
        group.bench_with_input(BenchmarkId::new("set_bit", size), &size, |b, &size| {
            let mut bf = BitField::new(size).unwrap();
            b.iter(|| {
                for &i in &indices {
                    bf.set_bit(black_box(i)).unwrap();
                }
            });
        });

        let bf = random_field(size, 0.5);
        group.bench_with_input(BenchmarkId::new("get_bit", size), &bf, |b, bf| {
            b.iter(|| {
                indices
                    .iter()
                    .filter(|&&i| bf.get_bit(black_box(i)).unwrap())
                    .count()
            });
        });
    }

    group.finish();
}

fn bench_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("algebra");

    for &size in SIZES {
        let a = random_field(size, 0.5);
        let b = random_field(size, 0.5);
        let half = random_field(size / 2 + 1, 0.5);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("or", size), &size, |bench, _| {
            bench.iter(|| black_box(&a).or(black_box(&b)));
        });
        group.bench_with_input(BenchmarkId::new("and", size), &size, |bench, _| {
            bench.iter(|| black_box(&a).and(black_box(&b)));
        });
        group.bench_with_input(BenchmarkId::new("and_mixed", size), &size, |bench, _| {
            bench.iter(|| black_box(&a).and(black_box(&half)));
        });
        group.bench_with_input(BenchmarkId::new("not", size), &size, |bench, _| {
            bench.iter(|| black_box(&a).not());
        });
    }

    group.finish();
}

fn bench_text_io(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_io");

    for &size in &SIZES[..4] {
        let bf = random_field(size, 0.5);
        let text = bf.to_string();

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("display", size), &bf, |b, bf| {
            b.iter(|| bf.to_string());
        });
        group.bench_with_input(BenchmarkId::new("read_from", size), &text, |b, text| {
            let mut target = BitField::new(size).unwrap();
            b.iter(|| target.read_from(black_box(text.as_bytes())).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bit_access, bench_algebra, bench_text_io);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use texarray_common::half::{decode_half_slice, encode_half_slice};

/// A 1024x1024 RGBA16 image worth of half floats.
const NUM_ELEMENTS: usize = 1024 * 1024 * 4;

fn generate_halves(num_elements: usize) -> Vec<u16> {
    // Cycles through every bit pattern, including subnormals and NaNs.
    (0..num_elements).map(|index| index as u16).collect()
}

fn bench_half_conversion(c: &mut Criterion) {
    let halves = generate_halves(NUM_ELEMENTS);
    let floats = decode_half_slice(&halves);

    let mut group = c.benchmark_group("half_conversion");
    group.throughput(Throughput::Bytes((NUM_ELEMENTS * 2) as u64));

    group.bench_with_input(BenchmarkId::new("decode", NUM_ELEMENTS), &halves, |b, halves| {
        b.iter(|| black_box(decode_half_slice(black_box(halves))))
    });
    group.bench_with_input(BenchmarkId::new("encode", NUM_ELEMENTS), &floats, |b, floats| {
        b.iter(|| black_box(encode_half_slice(black_box(floats))))
    });

    group.finish();
}

criterion_group!(benches, bench_half_conversion);
criterion_main!(benches);

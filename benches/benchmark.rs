//! Benchmarks for cascade keying and block throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shiftcascade::{interleave, CipherCascade};

const BENCH_PASSWORD: &str = "BenchmarkPassword2024";

/// One block is two 64-bit words.
const BLOCK_SIZE_BYTES: u64 = 16;

const PLAIN: (u64, u64) = (0x0123456789ABCDEF, 0xFEDCBA9876543210);

/// Full key derivation: seeding, attractor warm-up and schedule distribution.
fn bench_rekey(c: &mut Criterion) {
    c.bench_function("rekey", |b| {
        let mut cascade = CipherCascade::new();
        b.iter(|| {
            cascade.rekey(black_box(BENCH_PASSWORD)).unwrap();
        });
    });
}

fn bench_encode(c: &mut Criterion) {
    let mut cascade = CipherCascade::new();
    cascade.rekey(BENCH_PASSWORD).unwrap();

    let mut group = c.benchmark_group("encode_block");
    group.throughput(Throughput::Bytes(BLOCK_SIZE_BYTES));
    group.bench_function("9_rings", |b| {
        b.iter(|| cascade.encode_block(black_box(PLAIN.0), black_box(PLAIN.1)));
    });
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut cascade = CipherCascade::new();
    cascade.rekey(BENCH_PASSWORD).unwrap();

    let mut group = c.benchmark_group("decode_block");
    group.throughput(Throughput::Bytes(BLOCK_SIZE_BYTES));
    group.bench_function("9_rings", |b| {
        b.iter(|| cascade.decode_block(black_box(PLAIN.0), black_box(PLAIN.1)));
    });
    group.finish();
}

fn bench_interleave(c: &mut Criterion) {
    c.bench_function("interleave", |b| {
        b.iter(|| interleave(black_box(PLAIN.0), black_box(PLAIN.1)));
    });
}

/// Per-block cost as rings are added.
fn bench_ring_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_ring_scaling");
    group.throughput(Throughput::Bytes(BLOCK_SIZE_BYTES));

    for &rings in &[2usize, 9, 16, 64] {
        let mut cascade = CipherCascade::with_rings(rings).unwrap();
        cascade.rekey(BENCH_PASSWORD).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(rings), &rings, |b, _| {
            let mut block = [PLAIN.0, PLAIN.1];
            b.iter(|| cascade.encode_in_place(black_box(&mut block)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_rekey,
    bench_encode,
    bench_decode,
    bench_interleave,
    bench_ring_scaling,
);
criterion_main!(benches);

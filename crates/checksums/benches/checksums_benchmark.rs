//! crates/checksums/benches/checksums_benchmark.rs
//!
//! Benchmarks for checksum computation performance.
//!
//! Run with: `cargo bench -p checksums`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::Rng;

use checksums::RollingChecksum;
use checksums::strong::{Md5, Xxh3_128, Xxh64};

fn generate_random_data(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0u8; size];
    rng.fill(&mut data[..]);
    data
}

fn bench_rolling_checksum(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling_checksum");

    for size in [512, 1024, 4096, 8192, 32768, 131072] {
        let data = generate_random_data(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("update", size), &data, |b, data| {
            b.iter(|| {
                let mut checksum = RollingChecksum::new();
                checksum.update(black_box(data));
                black_box(checksum.value())
            });
        });
    }

    group.finish();
}

fn bench_rolling_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling_scan");

    let block_size = 2048;
    let data = generate_random_data(block_size * 64);
    group.throughput(Throughput::Bytes((data.len() - block_size) as u64));

    group.bench_function("roll_every_byte", |b| {
        b.iter(|| {
            let mut checksum = RollingChecksum::new();
            checksum.update(&data[..block_size]);
            for start in 1..=data.len() - block_size {
                checksum
                    .roll(data[start - 1], data[start + block_size - 1])
                    .unwrap();
            }
            black_box(checksum.value())
        });
    });

    group.bench_function("recompute_every_byte", |b| {
        b.iter(|| {
            let mut value = 0;
            for start in (0..=data.len() - block_size).step_by(block_size / 8) {
                let mut checksum = RollingChecksum::new();
                checksum.update(&data[start..start + block_size]);
                value ^= checksum.value();
            }
            black_box(value)
        });
    });

    group.finish();
}

fn bench_strong_checksums(c: &mut Criterion) {
    let mut group = c.benchmark_group("strong_checksum");

    for size in [700, 8192] {
        let data = generate_random_data(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("md5", size), &data, |b, data| {
            b.iter(|| black_box(Md5::digest(black_box(data))));
        });
        group.bench_with_input(BenchmarkId::new("xxh64", size), &data, |b, data| {
            b.iter(|| black_box(Xxh64::digest(0, black_box(data))));
        });
        group.bench_with_input(BenchmarkId::new("xxh3_128", size), &data, |b, data| {
            b.iter(|| black_box(Xxh3_128::digest(0, black_box(data))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_rolling_checksum,
    bench_rolling_scan,
    bench_strong_checksums
);
criterion_main!(benches);

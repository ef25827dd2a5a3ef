use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use wattframe::{decode, encode, validate_crc, SampleMatrix};

/// Flat traces: pure RLE frames, the producer's common case
fn flat_matrix(samples: u16, registers: u8) -> SampleMatrix {
    let row: Vec<u16> = (0..registers).map(|r| 1000 + u16::from(r) * 100).collect();
    let rows: Vec<Vec<u16>> = (0..samples).map(|_| row.clone()).collect();
    SampleMatrix::from_rows(&rows).unwrap()
}

/// Sawtooth traces: every sample changes, so every step is a delta op
fn sawtooth_matrix(samples: u16, registers: u8) -> SampleMatrix {
    let rows: Vec<Vec<u16>> = (0..samples)
        .map(|s| {
            (0..registers)
                .map(|r| 1000 + u16::from(r) * 100 + (s % 7))
                .collect()
        })
        .collect();
    SampleMatrix::from_rows(&rows).unwrap()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for (name, matrix) in [
        ("flat_288x10", flat_matrix(288, 10)),
        ("sawtooth_288x10", sawtooth_matrix(288, 10)),
        ("sawtooth_600x32", sawtooth_matrix(600, 32)),
    ] {
        let frame = encode(&matrix, false).unwrap();
        group.throughput(Throughput::Bytes(frame.len() as u64));
        group.bench_function(name, |b| b.iter(|| decode(black_box(&frame)).unwrap()));
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for (name, matrix) in [
        ("flat_288x10", flat_matrix(288, 10)),
        ("sawtooth_288x10", sawtooth_matrix(288, 10)),
    ] {
        let cells = matrix.as_slice().len() as u64;
        group.throughput(Throughput::Elements(cells));
        group.bench_function(name, |b| b.iter(|| encode(black_box(&matrix), false).unwrap()));
    }
    group.finish();
}

fn bench_crc(c: &mut Criterion) {
    let matrix = sawtooth_matrix(600, 32);
    let frame = wattframe::append_crc(encode(&matrix, false).unwrap());

    let mut group = c.benchmark_group("crc");
    group.throughput(Throughput::Bytes(frame.len() as u64));
    group.bench_function("validate_600x32", |b| {
        b.iter(|| validate_crc(black_box(&frame)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode, bench_crc);
criterion_main!(benches);

//! Benchmarks for symbol encoding

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qrsymbol::{EncodeOptions, Mask, QrCode, QrCodeEcc, QrSegment, reed_solomon};

fn bench_encode_text(c: &mut Criterion) {
    c.bench_function("encode_text_hello_world", |b| {
        b.iter(|| QrCode::encode_text(black_box("HELLO WORLD"), black_box(QrCodeEcc::Low)))
    });
    c.bench_function("encode_text_account_payload", |b| {
        b.iter(|| {
            QrCode::encode_text(
                black_box("NAME: MARIA GONZALEZ RODRIGUEZ, ACCOUNT: 1234567890"),
                black_box(QrCodeEcc::Medium),
            )
        })
    });
}

fn bench_encode_binary(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_binary");

    for len in [16usize, 256, 1024, 2953] {
        let data = vec![0xA5u8; len];
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter(|| QrCode::encode_binary(black_box(data), QrCodeEcc::Low))
        });
    }

    group.finish();
}

fn bench_mask_selection(c: &mut Criterion) {
    let segs = QrSegment::make_segments(&"0123456789".repeat(50));
    let forced = EncodeOptions::new().with_mask(Mask::new(0).unwrap());
    let auto = EncodeOptions::new();

    c.bench_function("encode_forced_mask", |b| {
        b.iter(|| QrCode::encode_segments_with(black_box(&segs), QrCodeEcc::Quartile, &forced))
    });
    c.bench_function("encode_auto_mask", |b| {
        b.iter(|| QrCode::encode_segments_with(black_box(&segs), QrCodeEcc::Quartile, &auto))
    });
}

fn bench_reed_solomon(c: &mut Criterion) {
    let divisor = reed_solomon::compute_divisor(30).unwrap();
    let data = vec![0x3Cu8; 118];
    c.bench_function("reed_solomon_remainder_30", |b| {
        b.iter(|| reed_solomon::compute_remainder(black_box(&data), black_box(&divisor)))
    });
}

criterion_group!(
    benches,
    bench_encode_text,
    bench_encode_binary,
    bench_mask_selection,
    bench_reed_solomon
);
criterion_main!(benches);

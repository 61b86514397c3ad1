//! Benchmark: extraction and FCS over a 1500-byte frame, plus append/verify of the
//! trailer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use packet_essentials::{
    append_fcs, compute_fcs, extract, verify_fcs, ChecksumRequest, ExtractionRequest,
    HexStream, OutputShape,
};

fn sample_frame() -> HexStream {
    HexStream::from_bytes((0..1500u32).map(|i| (i * 31 % 251) as u8).collect::<Vec<_>>())
}

fn bench_extract(c: &mut Criterion) {
    let frame = sample_frame();
    let mut group = c.benchmark_group("extract");
    group.bench_function("first_24_hex", |b| {
        let req = ExtractionRequest::first(24);
        b.iter(|| extract(black_box(&frame), &req).unwrap())
    });
    group.bench_function("chop_last_4_binary", |b| {
        let req = ExtractionRequest::last(4).chop(true).output(OutputShape::Binary);
        b.iter(|| extract(black_box(&frame), &req).unwrap())
    });
    group.bench_function("parse_text", |b| {
        let text = frame.to_string();
        b.iter(|| HexStream::parse(black_box(&text)).unwrap())
    });
    group.finish();
}

fn bench_fcs(c: &mut Criterion) {
    let frame = sample_frame();
    let with_fcs = append_fcs(&frame).unwrap();
    let mut group = c.benchmark_group("fcs");
    group.bench_function("compute_hex", |b| {
        let req = ChecksumRequest::default().min_digits(8);
        b.iter(|| compute_fcs(black_box(&frame), &req).unwrap())
    });
    group.bench_function("append", |b| b.iter(|| append_fcs(black_box(&frame)).unwrap()));
    group.bench_function("verify", |b| b.iter(|| verify_fcs(black_box(&with_fcs)).unwrap()));
    group.finish();
}

criterion_group!(benches, bench_extract, bench_fcs);
criterion_main!(benches);

//! Benchmark encode/decode throughput on emoji-heavy text

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use emoji_codec::{Direction, EmojiConverter};
use std::hint::black_box;

/// Generate test text with specified number of lines
fn generate_text(num_lines: usize) -> String {
    let lines = vec![
        "👋Hello World!🌎🙋‍♂️",
        "Plain Latin-1 text with caf\u{e9} and na\u{ef}ve words.",
        "🔥🔥🔥 launch day 🚀",
        "Mixed: Ελληνικά, русский, 日本語.",
    ];

    lines
        .iter()
        .cycle()
        .take(num_lines)
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let converter = EmojiConverter::new();

    for size in [10, 100, 1000].iter() {
        let text = generate_text(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| converter.convert(black_box(text), Direction::Encode));
        });
    }

    group.finish();
}

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let converter = EmojiConverter::new();

    for size in [10, 100, 1000].iter() {
        let encoded = converter.encode(&generate_text(*size));

        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, text| {
            b.iter(|| converter.convert(black_box(text), Direction::Decode));
        });
    }

    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let converter = EmojiConverter::new();
    let texts: Vec<String> = (0..256).map(|i| generate_text(i % 16 + 1)).collect();

    c.bench_function("batch_encode_256", |b| {
        b.iter(|| converter.convert_batch(black_box(&texts), Direction::Encode));
    });
}

criterion_group!(benches, benchmark_encode, benchmark_decode, benchmark_batch);
criterion_main!(benches);

//! Benchmarks for escape-aware measuring and truncation.
//!
//! Run with: cargo bench -p ansikit-text

use ansikit_text::{WrapMode, display_width, truncate, visible_length, wrap};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

// =============================================================================
// Test Data
// =============================================================================

/// Plain ASCII text of various lengths
fn plain_text(len: usize) -> String {
    "The quick brown fox jumps over the lazy dog. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

/// Text with an SGR sequence every few words
fn styled_text(len: usize) -> String {
    let mut out = String::new();
    let mut visible = 0;
    for (i, word) in ["status", "ok", "progress", "done", "failed"].iter().cycle().enumerate() {
        if visible >= len {
            break;
        }
        if i % 2 == 0 {
            out.push_str("\x1b[1;38;2;50;205;50m");
            out.push_str(word);
            out.push_str("\x1b[0m ");
        } else {
            out.push_str(word);
            out.push(' ');
        }
        visible += word.len() + 1;
    }
    out
}

/// CJK text (width 2 per char)
fn cjk_text(len: usize) -> String {
    "\u{4E2D}\u{6587}\u{6D4B}\u{8BD5}\u{6587}\u{672C}"
        .chars()
        .cycle()
        .take(len)
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_visible_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_length");

    for len in [10, 100, 1000, 10000] {
        let plain = plain_text(len);
        group.throughput(Throughput::Bytes(plain.len() as u64));
        group.bench_with_input(BenchmarkId::new("plain", len), &plain, |b, text| {
            b.iter(|| black_box(visible_length(text)))
        });

        let styled = styled_text(len);
        group.throughput(Throughput::Bytes(styled.len() as u64));
        group.bench_with_input(BenchmarkId::new("styled", len), &styled, |b, text| {
            b.iter(|| black_box(visible_length(text)))
        });
    }

    group.finish();
}

fn bench_display_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("display_width");

    for len in [10, 100, 1000] {
        let text = cjk_text(len);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| black_box(display_width(text)))
        });
    }

    group.finish();
}

fn bench_truncate(c: &mut Criterion) {
    let mut group = c.benchmark_group("truncate");

    for len in [100, 1000, 10000] {
        let text = styled_text(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| black_box(truncate(text, len / 2)))
        });
    }

    group.finish();
}

fn bench_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap");

    let text = styled_text(2000);
    for width in [20, 80] {
        group.bench_with_input(BenchmarkId::new("char", width), &text, |b, text| {
            b.iter(|| black_box(wrap(text, width, WrapMode::Char)))
        });
        group.bench_with_input(BenchmarkId::new("word", width), &text, |b, text| {
            b.iter(|| black_box(wrap(text, width, WrapMode::Word)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_visible_length,
    bench_display_width,
    bench_truncate,
    bench_wrap
);
criterion_main!(benches);

//! Benchmarks for the LCS alignment primitive at the granularities the
//! callers use it: characters, words, and lines.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use treeline_align::align;

fn edited_text(lines: usize) -> (String, String) {
    let left: Vec<String> = (0..lines).map(|i| format!("line number {i}")).collect();
    let mut right = left.clone();
    // Touch every 10th line and shift a block to exercise the backtrack.
    for i in (0..lines).step_by(10) {
        right[i] = format!("line number {i} edited");
    }
    if lines > 20 {
        right.rotate_left(7);
    }
    (left.join("\n"), right.join("\n"))
}

fn bench_char_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("align_chars");
    for len in [50usize, 200, 1_000] {
        let a: Vec<char> = "the quick brown fox jumps over the lazy dog "
            .chars()
            .cycle()
            .take(len)
            .collect();
        let mut b = a.clone();
        b[len / 2] = 'X';
        b.insert(len / 3, 'Y');

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            bench.iter(|| align(black_box(&a), black_box(&b)));
        });
    }
    group.finish();
}

fn bench_line_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("align_lines");
    for lines in [100usize, 500, 2_000] {
        let (left, right) = edited_text(lines);
        let a: Vec<&str> = left.split('\n').collect();
        let b: Vec<&str> = right.split('\n').collect();

        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |bench, _| {
            bench.iter(|| align(black_box(&a), black_box(&b)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_char_alignment, bench_line_alignment);
criterion_main!(benches);

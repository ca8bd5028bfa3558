use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use index_lookup::indices::{CancelToken, Indices, ReaderIndices};

/// Deterministic ascending values with uneven gaps.
fn sorted_values(len: usize) -> Vec<i64> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut current = 0i64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            current += 1 + (state % 64) as i64;
            current
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let token = CancelToken::new();

    for size in [128usize, 256, 65_536, 131_072, 262_144] {
        let values = sorted_values(size);
        let query_hit = values[size / 3];
        let query_miss = values[size / 3] + 1;
        let indices = ReaderIndices::from_values(values);

        group.bench_with_input(BenchmarkId::new("exact", size), &query_hit, |b, &v| {
            b.iter(|| indices.search(black_box(v), &token))
        });
        group.bench_with_input(BenchmarkId::new("fallback", size), &query_miss, |b, &v| {
            b.iter(|| indices.search(black_box(v), &token))
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let input = sorted_values(100_000)
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("\n");

    c.bench_function("parse_100k_lines", |b| {
        b.iter(|| ReaderIndices::from_reader(black_box(input.as_bytes())).unwrap())
    });
}

criterion_group!(benches, bench_search, bench_parse);
criterion_main!(benches);

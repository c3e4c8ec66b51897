//! Benchmarks: construction vs the two query paths.
//!
//! Measures where time goes for realistic workloads:
//! - Build: one full Ukkonen construction per iteration
//! - Report: the single-pass all-NF computation on a fresh tree
//! - Query: repeated single_nf lookups on a prebuilt tree

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use netfreq::{wrap_sentinels, SuffixTree};
use rand::{rngs::StdRng, Rng, SeedableRng};

const ALPHABET: &[u8] = b"acgt";

fn generate_text(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let raw: Vec<u8> = (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect();
    wrap_sentinels(&raw).expect("alphabet contains no sentinel bytes")
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &len in &[1_000usize, 16_000, 64_000] {
        let text = generate_text(len, 7);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| SuffixTree::new(black_box(text)));
        });
    }
    group.finish();
}

fn bench_all_nf(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_nf");
    for &len in &[1_000usize, 16_000] {
        let text = generate_text(len, 11);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            // the pass runs once per tree, so each iteration needs a fresh one
            b.iter_batched(
                || SuffixTree::new(text),
                |mut tree| tree.nf_entries().len(),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_single_nf(c: &mut Criterion) {
    let text = generate_text(16_000, 13);
    let tree = SuffixTree::new(&text);

    // sample query strings of mixed length from the text itself
    let mut rng = StdRng::seed_from_u64(17);
    let queries: Vec<&[u8]> = (0..256)
        .map(|_| {
            let len = rng.gen_range(2..12);
            let start = rng.gen_range(1..text.len() - len);
            &text[start..start + len]
        })
        .collect();

    c.bench_function("single_nf/256_queries", |b| {
        b.iter(|| {
            let mut total = 0u64;
            for q in &queries {
                total += u64::from(tree.single_nf(black_box(q)));
            }
            total
        });
    });
}

criterion_group!(benches, bench_build, bench_all_nf, bench_single_nf);
criterion_main!(benches);

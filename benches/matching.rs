//! Benchmarks for the stable matcher.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- deferred_acceptance
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

use stable_match::{blocking_pairs, Matcher, MatcherConfig, PreferenceTable, Selection};

// ============================================================================
// HELPER FUNCTIONS - Deterministic instance generation
// ============================================================================

type Table = PreferenceTable<u32, u32>;

/// Random complete tables (same seed = same tables)
fn random_instance(n: u32, seed: u64) -> (Table, Table) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut side = || -> Table {
        (0..n)
            .map(|owner| {
                let mut prefs: Vec<u32> = (0..n).collect();
                prefs.shuffle(&mut rng);
                (owner, prefs)
            })
            .collect()
    };
    let proposers = side();
    let receivers = side();
    (proposers, receivers)
}

/// Every proposer ranks receivers identically, so proposer k is rejected k
/// times: n(n+1)/2 proposals.
fn agreeing_instance(n: u32) -> (Table, Table) {
    let proposers = (0..n).map(|m| (m, (0..n).collect::<Vec<_>>())).collect();
    let receivers = (0..n).map(|w| (w, (0..n).collect::<Vec<_>>())).collect();
    (proposers, receivers)
}

// ============================================================================
// BENCHMARK: Deferred acceptance on random instances
// ============================================================================

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("deferred_acceptance");
    group.measurement_time(Duration::from_secs(5));

    for n in [16u32, 128, 512] {
        let (proposers, receivers) = random_instance(n, 42);
        group.throughput(Throughput::Elements(u64::from(n) * u64::from(n)));
        group.bench_with_input(BenchmarkId::new("random", n), &n, |b, _| {
            let matcher = Matcher::new();
            b.iter(|| black_box(matcher.run(&proposers, &receivers)))
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Selection policies
// ============================================================================

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    let (proposers, receivers) = random_instance(256, 7);

    for (name, selection) in [
        ("lowest", Selection::LowestIndex),
        ("fifo", Selection::Fifo),
        ("lifo", Selection::Lifo),
        ("random", Selection::Random { seed: 7 }),
    ] {
        let matcher = Matcher::with_config(MatcherConfig::new().with_selection(selection));
        group.bench_function(name, |b| {
            b.iter(|| black_box(matcher.run(&proposers, &receivers)))
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Worst-case style inputs and stability checking
// ============================================================================

fn bench_agreeing(c: &mut Criterion) {
    let (proposers, receivers) = agreeing_instance(512);
    let matcher = Matcher::new();
    c.bench_function("agreeing_512", |b| {
        b.iter(|| black_box(matcher.run(&proposers, &receivers)))
    });
}

fn bench_blocking_pairs(c: &mut Criterion) {
    let (proposers, receivers) = random_instance(256, 99);
    let pairs: Vec<(u32, u32)> = (0..256).map(|i| (i, i)).collect();
    c.bench_function("blocking_pairs_256", |b| {
        b.iter(|| black_box(blocking_pairs(&proposers, &receivers, &pairs)))
    });
}

criterion_group!(
    benches,
    bench_random,
    bench_selection,
    bench_agreeing,
    bench_blocking_pairs
);
criterion_main!(benches);

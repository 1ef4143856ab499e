//! Lei Words Benchmarks
//!
//! This module contains benchmarks for the Kui Word Trie: insertion, the
//! recursive decomposition test, and the ranking and counting queries. The
//! benchmarks are implemented using the Criterion framework, which provides
//! statistical analysis and performance regression detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use std::time::Duration;

use lei_words_lib::bench::{synthetic_word_list, synthetic_word_list_with_joins};
use lei_words_lib::data_structures::kui_trie::KuiTrie;

/// Benchmark word insertion into the Kui Word Trie
fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("kui_trie_insertion");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1000, 10_000].iter() {
        let words = synthetic_word_list(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("add_word", size), &words, |b, words| {
            b.iter(|| {
                let mut trie = KuiTrie::new();
                for word in words {
                    trie.add_word(black_box(word));
                }
            });
        });
    }

    group.finish();
}

/// Benchmark the recursive decomposition test
fn bench_decomposition(c: &mut Criterion) {
    let mut group = c.benchmark_group("kui_trie_decomposition");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    let words = synthetic_word_list_with_joins(1000);
    let mut trie = KuiTrie::new();
    for word in &words {
        trie.add_word(word);
    }

    group.bench_function("is_concatenated", |b| {
        let mut index = 0;
        b.iter(|| {
            // Cycle through the list so joins and base words both appear
            let word = &words[index % words.len()];
            index += 1;
            black_box(trie.is_concatenated(word))
        });
    });

    group.finish();
}

/// Benchmark the ranking and counting queries
fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("kui_trie_ranking");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));

    for size in [100, 1000].iter() {
        let words = synthetic_word_list_with_joins(*size);
        let mut trie = KuiTrie::new();
        for word in &words {
            trie.add_word(word);
        }

        group.bench_with_input(BenchmarkId::new("find_longest", size), &trie, |b, trie| {
            b.iter(|| black_box(trie.find_longest_concatenated_word(black_box(2))));
        });

        group.bench_with_input(BenchmarkId::new("total_count", size), &trie, |b, trie| {
            b.iter(|| black_box(trie.total_concatenated_words()));
        });
    }

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_insertion, bench_decomposition, bench_ranking
}

criterion_main!(benches);

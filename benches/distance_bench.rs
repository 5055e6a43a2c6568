use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use spellgram::ngram::{NGramBuilder, NGramLengths};
use spellgram::spelling::{DistanceKind, NGramQueryBuilder};

fn generate_test_words(count: usize) -> Vec<String> {
    let syllables = ["spe", "ll", "ing", "gram", "ca", "t", "que", "ry", "dic", "tion"];
    (0..count)
        .map(|i| {
            (0..(i % 4) + 2)
                .map(|j| syllables[(i * 7 + j * 3) % syllables.len()])
                .collect()
        })
        .collect()
}

fn bench_distances(c: &mut Criterion) {
    let words = generate_test_words(101);
    let query = &words[0];
    let targets = &words[1..101];

    let mut group = c.benchmark_group("string_distances");

    for kind in [DistanceKind::Levenshtein, DistanceKind::DamerauLevenshtein] {
        let measure = kind.build();
        group.bench_function(format!("{kind:?}"), |b| {
            b.iter(|| {
                for target in targets {
                    black_box(measure.distance(black_box(query), black_box(target)));
                }
            })
        });
    }

    group.finish();
}

fn bench_ngrams(c: &mut Criterion) {
    let words = generate_test_words(100);
    let mut group = c.benchmark_group("ngrams");

    group.bench_function("build_by_word_length", |b| {
        b.iter(|| {
            for word in &words {
                black_box(NGramBuilder::build_with(black_box(word), &NGramLengths::ByWordLength));
            }
        })
    });

    let builder = NGramQueryBuilder::default();
    group.bench_function("query", |b| {
        b.iter(|| {
            for word in &words {
                black_box(builder.build(black_box(word)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_distances, bench_ngrams);
criterion_main!(benches);

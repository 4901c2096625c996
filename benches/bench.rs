use criterion::{Criterion, black_box, criterion_group, criterion_main};

use nhamlan::confusion::ConfusionSetBuilder;
use nhamlan::similarity::{EditDistanceHeuristic, levenshtein_distance};
use nhamlan::telex::decompose;
use nhamlan::vocab::{DecomposedVocab, Vocabulary};

fn generate_test_vocab(count: usize) -> Vec<String> {
    // Synthetic syllables over a small onset/vowel/tone grid.
    let onsets = ["b", "c", "ch", "d", "kh", "m", "ng", "nh", "th", "tr"];
    let vowels = ["a", "á", "à", "ă", "â", "e", "ê", "i", "o", "ô", "ơ", "u", "ư"];
    let codas = ["", "c", "m", "n", "ng", "t"];

    let mut words = Vec::with_capacity(count);
    'outer: for coda in codas {
        for onset in onsets {
            for vowel in vowels {
                if words.len() == count {
                    break 'outer;
                }
                words.push(format!("{onset}{vowel}{coda}"));
            }
        }
    }
    words
}

fn bench_levenshtein(c: &mut Criterion) {
    let pairs = [
        ("ba", "bi"),
        ("nguoi", "nguoi"),
        ("thuong", "truong"),
        ("nghieng", "ngang"),
    ];

    c.bench_function("levenshtein_distance", |b| {
        b.iter(|| {
            for (s1, s2) in pairs {
                let _ = black_box(levenshtein_distance(black_box(s1), black_box(s2)));
            }
        })
    });
}

fn bench_decompose(c: &mut Criterion) {
    let words = ["ba", "bá", "mưa", "người", "tiếng", "nghieng", "đường"];

    c.bench_function("decompose", |b| {
        b.iter(|| {
            for word in words {
                let _ = black_box(decompose(black_box(word)));
            }
        })
    });
}

fn bench_build(c: &mut Criterion) {
    let vocab = Vocabulary::from_words(generate_test_vocab(300));
    let decomposed = DecomposedVocab::from_vocabulary(&vocab);
    let heuristic = EditDistanceHeuristic::within_1();

    let mut group = c.benchmark_group("confusion_set_build");
    group.sample_size(10);

    for threads in [1, 4] {
        group.bench_function(format!("300_words_{threads}_threads"), |b| {
            let builder = ConfusionSetBuilder::new().num_threads(threads);
            b.iter(|| {
                let _ = black_box(builder.build(black_box(&decomposed), &heuristic).unwrap());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_levenshtein, bench_decompose, bench_build);
criterion_main!(benches);

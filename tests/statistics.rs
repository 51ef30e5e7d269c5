use rand::SeedableRng;
use rand_pcg::Pcg32;
use statrs::distribution::{Binomial, DiscreteCDF};
use std::collections::HashMap;
use vose_sampler::{AliasTable, Sampler, corpus};

const SMALL_CORPUS: &str = "Alice was beginning to get very tired of sitting by her sister \
    on the bank, and of having nothing to do: once or twice she had peeped into the book \
    her sister was reading, but it had no pictures or conversations in it, and what is the \
    use of a book, thought Alice without pictures or conversations?";

/// Two-sided exact binomial test of `successes` out of `trials` against `p`.
fn binomial_p_value(successes: u64, trials: u64, p: f64) -> f64 {
    let b = Binomial::new(p, trials).unwrap();
    let upper = if successes == 0 {
        1.0
    } else {
        b.sf(successes - 1)
    };
    let lower = b.cdf(successes);
    (2.0 * upper.min(lower)).min(1.0)
}

#[test]
fn word_frequencies_pass_binomial_test() {
    let dist = corpus::sample_to_dist(SMALL_CORPUS.split_whitespace());
    let table = AliasTable::new(&dist).unwrap();
    let mut sampler = Sampler::new(&table, Pcg32::seed_from_u64(2024));

    let trials = 1000u64;
    for word in ["of", "Alice", "the", "conversations?"] {
        let hits = (0..trials)
            .filter(|_| *sampler.sample_one() == word)
            .count() as u64;
        let p_value = binomial_p_value(hits, trials, dist[word]);
        assert!(p_value > 0.01, "{word}: {hits}/{trials}, p-value {p_value}");
    }
}

#[test]
fn coin_round_trip_converges() {
    let dist = HashMap::from([("H", 0.2), ("T", 0.8)]);
    let table = AliasTable::new(&dist).unwrap();
    let sample = Sampler::new(&table, Pcg32::seed_from_u64(1))
        .sample_n(100_000)
        .unwrap();

    let computed = corpus::sample_to_dist(sample);
    for (o, p) in &dist {
        assert!(
            (computed[o] - p).abs() < 0.01,
            "{o}: {} vs {p}",
            computed[o]
        );
    }
}

#[test]
fn seeded_draws_are_fixed() {
    let table = AliasTable::from_pairs([("a", 0.1), ("b", 0.6), ("c", 0.3)]).unwrap();
    let first = Sampler::new(&table, Pcg32::seed_from_u64(0xdead_beef))
        .sample_n(1000)
        .unwrap();
    let again = Sampler::new(&table, Pcg32::seed_from_u64(0xdead_beef))
        .sample_n(1000)
        .unwrap();
    assert_eq!(first, again);

    let other = Sampler::new(&table, Pcg32::seed_from_u64(0xfeed))
        .sample_n(1000)
        .unwrap();
    assert_ne!(first, other);
}

#[test]
fn seeded_draws_match_known_sequence() {
    let table = AliasTable::from_pairs([("a", 0.1), ("b", 0.6), ("c", 0.3)]).unwrap();
    assert_eq!(table.probability(&"b"), Some(1.0));

    let draws = Sampler::new(&table, Pcg32::seed_from_u64(0xdead_beef))
        .sample_n(20)
        .unwrap();
    assert_eq!(
        draws,
        [
            "b", "b", "c", "c", "b", "b", "c", "b", "b", "c", //
            "b", "b", "b", "b", "b", "b", "c", "a", "a", "c",
        ]
    );
}

#[test]
fn shared_table_across_threads() {
    let table = AliasTable::from_pairs((0..50u32).map(|i| (i, 1.0 / 50.0))).unwrap();

    let results: Vec<Vec<u32>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4u64)
            .map(|seed| {
                let table = &table;
                scope.spawn(move || {
                    Sampler::new(table, Pcg32::seed_from_u64(seed))
                        .sample_n(2000)
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (seed, draws) in results.iter().enumerate() {
        let expected = Sampler::new(&table, Pcg32::seed_from_u64(seed as u64))
            .sample_n(2000)
            .unwrap();
        assert_eq!(draws, &expected);
    }
}

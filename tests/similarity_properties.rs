//! Property tests for n-gram similarity.

use std::collections::HashMap;

use proptest::prelude::*;
use toolshed::similarity::ngram::ngrams;
use toolshed::similarity::{NgramSimilarity, SimilarityConfig, TextUnit, similarity};

fn scorer(k: usize, case_sensitive: bool) -> NgramSimilarity {
    NgramSimilarity::new(SimilarityConfig::new(k, case_sensitive).unwrap()).unwrap()
}

/// Sum over shared n-grams of the smaller occurrence count.
fn expected_matches(a: &str, b: &str, k: usize) -> usize {
    let mut counts_a: HashMap<&str, usize> = HashMap::new();
    for gram in ngrams(a, k, TextUnit::Char) {
        *counts_a.entry(gram).or_default() += 1;
    }
    let mut counts_b: HashMap<&str, usize> = HashMap::new();
    for gram in ngrams(b, k, TextUnit::Char) {
        *counts_b.entry(gram).or_default() += 1;
    }
    counts_a
        .iter()
        .map(|(gram, n)| (*n).min(counts_b.get(gram).copied().unwrap_or(0)))
        .sum()
}

proptest! {
    #[test]
    fn score_is_within_unit_interval(a in "[a-cA-C]{0,16}", b in "[a-cA-C]{0,16}", k in 1usize..5, cs: bool) {
        let score = similarity(&a, &b, k, cs).unwrap();
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn score_is_symmetric(a in "[a-dA-D]{0,16}", b in "[a-dA-D]{0,16}", k in 1usize..5, cs: bool) {
        prop_assert_eq!(similarity(&a, &b, k, cs).unwrap(), similarity(&b, &a, k, cs).unwrap());
    }

    #[test]
    fn identical_strings_score_one(a in "\\PC{0,16}", k in 1usize..5, cs: bool) {
        let score = similarity(&a, &a, k, cs).unwrap();
        // Lengths are measured after folding, which may add chars.
        let folded = if cs { a.clone() } else { a.to_lowercase() };
        if folded.chars().count() >= k {
            prop_assert_eq!(score, 1.0);
        } else {
            prop_assert_eq!(score, 0.0);
        }
    }

    #[test]
    fn disjoint_alphabets_score_zero(a in "[a-cA-C]{0,16}", b in "[x-zX-Z]{0,16}", k in 1usize..5, cs: bool) {
        prop_assert_eq!(similarity(&a, &b, k, cs).unwrap(), 0.0);
        prop_assert_eq!(scorer(k, cs).compare(&a, &b).matches, 0);
    }

    #[test]
    fn matches_are_capped_by_multiplicity(a in "[ab]{0,12}", b in "[ab]{0,12}", k in 1usize..4) {
        let result = scorer(k, true).compare(&a, &b);
        if a.len() >= k && b.len() >= k {
            prop_assert_eq!(result.matches, expected_matches(&a, &b, k));
        } else {
            prop_assert_eq!(result.matches, 0);
        }
    }

    #[test]
    fn case_insensitive_ignores_ascii_case(a in "[a-eA-E]{0,12}", b in "[a-e]{0,12}", k in 1usize..4) {
        let upper = a.to_uppercase();
        prop_assert_eq!(
            similarity(&upper, &b, k, false).unwrap(),
            similarity(&a.to_lowercase(), &b, k, false).unwrap()
        );
    }
}

#[test]
fn test_documented_scenarios() {
    let approx = |x: f64, y: f64| (x - y).abs() < 1e-4;

    assert!(approx(similarity("casa", "casaco", 3, false).unwrap(), 0.6667));
    assert!(approx(similarity("hello", "hella", 3, false).unwrap(), 0.6667));
    assert_eq!(
        similarity("CASA", "casaco", 3, false).unwrap(),
        similarity("casa", "casaco", 3, false).unwrap()
    );
    assert_eq!(similarity("ab", "ab", 3, false).unwrap(), 0.0);
    assert_eq!(similarity("", "", 3, false).unwrap(), 0.0);
}

#[test]
fn test_folding_that_adds_chars() {
    // 'İ' lowercases to 'i' plus a combining dot, so three chars fold to six.
    assert_eq!(similarity("İİİ", "İİİ", 3, false).unwrap(), 1.0);
    assert_eq!(similarity("İ", "İ", 2, false).unwrap(), 1.0);
    assert_eq!(similarity("İ", "İ", 2, true).unwrap(), 0.0);
}

#[test]
fn test_multiplicity_cap_scenario() {
    let result = scorer(1, false).compare("aaaa", "aaaaaaaa");
    assert_eq!(result.matches, 4);
    assert!(result.matches <= 4.min(8));
}

#[test]
fn test_scorer_shared_across_threads() {
    let scorer = std::sync::Arc::new(NgramSimilarity::trigram());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let scorer = scorer.clone();
            std::thread::spawn(move || scorer.score(&format!("casa{i}"), &format!("casaco{i}")))
        })
        .collect();

    for handle in handles {
        let score = handle.join().unwrap();
        assert!(score > 0.0 && score < 1.0);
    }
}

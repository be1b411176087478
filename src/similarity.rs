//! N-gram string similarity.
//!
//! Two strings are compared by the fixed-length substrings (n-grams) they
//! share. Every n-gram occurrence of the first string can be matched at most
//! once, so repeated substrings only count as often as they appear on both
//! sides. The score is
//!
//! ```text
//! 2 * matches / (len(a) + len(b) - 2 * (k - 1))
//! ```
//!
//! where the denominator is the total number of n-gram positions in both
//! strings. Scores lie in `[0, 1]`; identical strings of at least `k` units
//! score `1.0`, and a string shorter than `k` always scores `0.0`.
//!
//! # Examples
//!
//! ```
//! use toolshed::similarity::{similarity, trigram_similarity};
//!
//! let score = trigram_similarity("casa", "casaco");
//! assert!((score - 2.0 / 3.0).abs() < 1e-9);
//!
//! // Case-sensitive bigrams
//! let score = similarity("Night", "nacht", 2, true).unwrap();
//! assert!((score - 0.25).abs() < 1e-9);
//! ```

pub mod ngram;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Result, ToolshedError};
use crate::similarity::ngram::{NgramCounter, ngrams};
use crate::util::fold::fold_if;

/// Default n-gram width.
pub const DEFAULT_SUBSTRING_LENGTH: usize = 3;

/// What a single unit of text is when measuring length and sliding windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextUnit {
    /// Unicode scalar values.
    #[default]
    Char,
    /// Extended grapheme clusters.
    Grapheme,
}

/// Configuration for n-gram similarity scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Width of each n-gram, in units. Must be at least 1.
    pub substring_length: usize,
    /// Compare case-sensitively. When false both strings are case-folded first.
    pub case_sensitive: bool,
    /// Unit used for lengths and windows.
    pub unit: TextUnit,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        SimilarityConfig {
            substring_length: DEFAULT_SUBSTRING_LENGTH,
            case_sensitive: false,
            unit: TextUnit::Char,
        }
    }
}

impl SimilarityConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `substring_length` is 0.
    pub fn new(substring_length: usize, case_sensitive: bool) -> Result<Self> {
        let config = SimilarityConfig {
            substring_length,
            case_sensitive,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the text unit.
    pub fn with_unit(mut self, unit: TextUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Set case sensitivity.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Check that the configuration can be used for scoring.
    pub fn validate(&self) -> Result<()> {
        if self.substring_length == 0 {
            debug!("rejecting similarity config with zero substring length");
            return Err(ToolshedError::invalid_argument(
                "substring_length must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Raw numbers behind a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgramMatch {
    /// N-gram occurrences of the second string matched in the first.
    pub matches: usize,
    /// Total n-gram positions across both strings. Zero when either string
    /// is shorter than the n-gram width.
    pub adjusted_length: usize,
}

impl NgramMatch {
    /// `2 * matches / adjusted_length`, or `0.0` when there are no positions.
    pub fn score(&self) -> f64 {
        if self.adjusted_length == 0 {
            return 0.0;
        }
        (2 * self.matches) as f64 / self.adjusted_length as f64
    }
}

/// A validated n-gram similarity scorer.
///
/// Holds no state between calls and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct NgramSimilarity {
    config: SimilarityConfig,
}

impl NgramSimilarity {
    /// Create a scorer from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: SimilarityConfig) -> Result<Self> {
        config.validate()?;
        Ok(NgramSimilarity { config })
    }

    /// Trigram, case-insensitive scorer.
    pub fn trigram() -> Self {
        NgramSimilarity::default()
    }

    /// The active configuration.
    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// Count matching n-grams between `a` and `b`.
    pub fn compare(&self, a: &str, b: &str) -> NgramMatch {
        let width = self.config.substring_length;
        let a = fold_if(a, self.config.case_sensitive);
        let b = fold_if(b, self.config.case_sensitive);

        let grams_a = ngrams(&a, width, self.config.unit);
        let grams_b = ngrams(&b, width, self.config.unit);
        let (len_a, len_b) = (grams_a.unit_count(), grams_b.unit_count());

        if len_a < width || len_b < width {
            return NgramMatch {
                matches: 0,
                adjusted_length: 0,
            };
        }

        let mut counter: NgramCounter = grams_a.collect();
        let matches = grams_b.filter(|gram| counter.consume(gram)).count();
        let adjusted_length = len_a + len_b - 2 * (width - 1);

        trace!(
            len_a,
            len_b,
            width,
            matches,
            adjusted_length,
            "compared n-grams"
        );

        NgramMatch {
            matches,
            adjusted_length,
        }
    }

    /// Similarity of `a` and `b` in `[0, 1]`.
    pub fn score(&self, a: &str, b: &str) -> f64 {
        self.compare(a, b).score()
    }
}

/// Similarity of `a` and `b` using n-grams of `substring_length` units.
///
/// # Errors
///
/// Returns an error if `substring_length` is 0.
pub fn similarity(a: &str, b: &str, substring_length: usize, case_sensitive: bool) -> Result<f64> {
    let scorer = NgramSimilarity::new(SimilarityConfig::new(substring_length, case_sensitive)?)?;
    Ok(scorer.score(a, b))
}

/// Case-insensitive trigram similarity of `a` and `b`.
pub fn trigram_similarity(a: &str, b: &str) -> f64 {
    NgramSimilarity::trigram().score(a, b)
}

//! N-gram extraction and the consuming n-gram multiset.
//!
//! N-grams are borrowed slices of the input text. A window of `width` units
//! slides one unit at a time from the start of the text, so a text of `n`
//! units yields `n - width + 1` n-grams (none when `n < width`).
//!
//! # Examples
//!
//! ```
//! use toolshed::similarity::TextUnit;
//! use toolshed::similarity::ngram::ngrams;
//!
//! let grams: Vec<&str> = ngrams("hello", 3, TextUnit::Char).collect();
//! assert_eq!(grams, vec!["hel", "ell", "llo"]);
//! ```

use ahash::AHashMap;
use unicode_segmentation::UnicodeSegmentation;

use crate::similarity::TextUnit;

/// Iterator over the fixed-width n-grams of a text.
#[derive(Clone, Debug)]
pub struct Ngrams<'a> {
    text: &'a str,
    /// Byte offset of every unit start, followed by `text.len()`.
    bounds: Vec<usize>,
    width: usize,
    next: usize,
}

impl<'a> Ngrams<'a> {
    fn new(text: &'a str, width: usize, unit: TextUnit) -> Self {
        let mut bounds: Vec<usize> = match unit {
            TextUnit::Char => text.char_indices().map(|(i, _)| i).collect(),
            TextUnit::Grapheme => text.grapheme_indices(true).map(|(i, _)| i).collect(),
        };
        bounds.push(text.len());

        Ngrams {
            text,
            bounds,
            width,
            next: 0,
        }
    }

    /// Number of units (chars or graphemes) in the whole text.
    pub fn unit_count(&self) -> usize {
        self.bounds.len() - 1
    }

    /// The window width in units.
    pub fn width(&self) -> usize {
        self.width
    }

    fn remaining(&self) -> usize {
        if self.width == 0 {
            return 0;
        }
        (self.unit_count() + 1).saturating_sub(self.next + self.width)
    }
}

impl<'a> Iterator for Ngrams<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }

        let start = self.bounds[self.next];
        let end = self.bounds[self.next + self.width];
        self.next += 1;

        Some(&self.text[start..end])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ngrams<'_> {}

/// Extract the n-grams of `text` that are exactly `width` units long.
///
/// A `width` of zero yields nothing.
pub fn ngrams(text: &str, width: usize, unit: TextUnit) -> Ngrams<'_> {
    Ngrams::new(text, width, unit)
}

/// A multiset of n-grams with a consuming match operation.
///
/// Each occurrence of an n-gram can be matched once. After
/// [`consume`](Self::consume) succeeds `m` times for an n-gram that was
/// inserted `m` times, further attempts fail.
#[derive(Clone, Debug, Default)]
pub struct NgramCounter<'a> {
    counts: AHashMap<&'a str, usize>,
    total: usize,
}

impl<'a> NgramCounter<'a> {
    /// Create an empty counter.
    pub fn new() -> Self {
        NgramCounter::default()
    }

    /// Count the n-grams of `text`.
    pub fn from_text(text: &'a str, width: usize, unit: TextUnit) -> Self {
        ngrams(text, width, unit).collect()
    }

    /// Add one occurrence of `gram`.
    pub fn insert(&mut self, gram: &'a str) {
        *self.counts.entry(gram).or_insert(0) += 1;
        self.total += 1;
    }

    /// Remaining unmatched occurrences of `gram`.
    pub fn count(&self, gram: &str) -> usize {
        self.counts.get(gram).copied().unwrap_or(0)
    }

    /// Match one occurrence of `gram`.
    ///
    /// Returns `true` and decrements the count when an unmatched occurrence
    /// remains, otherwise leaves the counter untouched and returns `false`.
    pub fn consume(&mut self, gram: &str) -> bool {
        match self.counts.get_mut(gram) {
            Some(count) if *count > 0 => {
                *count -= 1;
                self.total -= 1;
                true
            }
            _ => false,
        }
    }

    /// Number of distinct n-grams ever inserted.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if nothing was inserted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total unmatched occurrences across all n-grams.
    pub fn total(&self) -> usize {
        self.total
    }
}

impl<'a> FromIterator<&'a str> for NgramCounter<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counter = NgramCounter::new();
        for gram in iter {
            counter.insert(gram);
        }
        counter
    }
}

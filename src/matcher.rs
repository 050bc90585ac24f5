//! Letter-multiset matching.
//!
//! A candidate matches a source word when every letter it uses can be drawn
//! from the source's letters without exceeding how often each one occurs.
//! Not every letter of the source has to be used.

use rayon::prelude::*;
use std::collections::HashMap;

/// Tests candidate words against the letters of a fixed source word.
#[derive(Debug, Clone)]
pub struct LetterMatcher {
    source: String,
    letters: HashMap<char, usize>,
}

impl LetterMatcher {
    /// Build the matcher from `word`, folded to lowercase.
    pub fn new(word: &str) -> Self {
        let source = word.to_lowercase();
        let mut letters = HashMap::new();
        for c in source.chars() {
            *letters.entry(c).or_insert(0) += 1;
        }
        Self { source, letters }
    }

    /// The case-folded source word.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// How many times `letter` occurs in the source word.
    pub fn letter_count(&self, letter: char) -> usize {
        self.letters.get(&letter).copied().unwrap_or(0)
    }

    /// An empty source word has no letters to give and matches nothing.
    pub fn is_degenerate(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check whether `candidate` can be spelled from the source letters.
    ///
    /// Candidate characters are compared as given, so callers fold case
    /// before calling. Each call draws from its own copy of the letter
    /// counts and returns on the first letter that is used up.
    pub fn matches(&self, candidate: &str) -> bool {
        if self.is_degenerate() {
            return false;
        }

        let mut remaining = self.letters.clone();
        for c in candidate.chars() {
            match remaining.get_mut(&c) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }

        true
    }

    /// Lazily keep the words that match, in the order they arrive.
    pub fn filter<'a, I>(&'a self, words: I) -> impl Iterator<Item = I::Item> + 'a
    where
        I: IntoIterator + 'a,
        I::IntoIter: 'a,
        I::Item: AsRef<str>,
    {
        words
            .into_iter()
            .filter(move |word| self.matches(word.as_ref()))
    }

    /// Check a loaded word list across the rayon pool.
    ///
    /// The result keeps input order, same as [`LetterMatcher::filter`].
    pub fn filter_par<'w>(&self, words: &'w [String]) -> Vec<&'w str> {
        words
            .par_iter()
            .filter(|word| self.matches(word))
            .map(String::as_str)
            .collect()
    }
}

//! # Match Words
//!
//! Finds every word in a dictionary that can be spelled using only the
//! letters of a source word, each letter at most as often as it appears
//! there. Not all letters have to be used.
//!
//! The dictionary is streamed line by line and checked against a
//! [`LetterMatcher`]; matches come out in file order.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod matcher;

pub use config::Config;
pub use dictionary::{words, words_from_reader, Words, DEFAULT_MIN_LENGTH};
pub use error::{DictionaryError, Error, Result};
pub use matcher::LetterMatcher;

use std::io::Write;
use tracing::info;

/// Counts from a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Words that passed the length filter and were checked.
    pub scanned: usize,
    pub matched: usize,
}

/// Stream the configured dictionary and write each match on its own line.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunSummary> {
    let matcher = LetterMatcher::new(&config.word);
    let mut summary = RunSummary::default();

    for word in words(&config.dictionary, config.min_length)? {
        let word = word?;
        summary.scanned += 1;
        if matcher.matches(&word) {
            writeln!(out, "{}", word)?;
            summary.matched += 1;
        }
    }

    info!(
        word = matcher.source(),
        scanned = summary.scanned,
        matched = summary.matched,
        "scan complete"
    );
    Ok(summary)
}

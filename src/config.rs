//! Run configuration for the command-line tool.

use std::path::PathBuf;
use tracing::warn;

/// Source word used when none is given.
pub const DEFAULT_WORD: &str = "ростелеком";

/// Dictionary file used when none is given.
pub const DEFAULT_DICTIONARY: &str = "sociation_org.txt";

/// Minimum word length for a command-line run. Deliberately separate from
/// [`crate::dictionary::DEFAULT_MIN_LENGTH`].
pub const TOP_LEVEL_MIN_LENGTH: usize = 3;

/// Environment variable overriding [`TOP_LEVEL_MIN_LENGTH`].
pub const MIN_LENGTH_ENV: &str = "MATCH_WORDS_MIN_LENGTH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub word: String,
    pub dictionary: PathBuf,
    pub min_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word: DEFAULT_WORD.to_string(),
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            min_length: TOP_LEVEL_MIN_LENGTH,
        }
    }
}

impl Config {
    /// Fill in anything not supplied from the defaults.
    pub fn new(word: Option<String>, dictionary: Option<PathBuf>) -> Self {
        let defaults = Self::default();
        Self {
            word: word.unwrap_or(defaults.word),
            dictionary: dictionary.unwrap_or(defaults.dictionary),
            min_length: defaults.min_length,
        }
    }

    /// Apply a minimum length override taken from the environment.
    ///
    /// Values that are not a non-negative integer are ignored.
    pub fn with_min_length_override(mut self, value: Option<&str>) -> Self {
        if let Some(raw) = value {
            match raw.trim().parse() {
                Ok(n) => self.min_length = n,
                Err(_) => warn!(value = raw, "ignoring invalid {}", MIN_LENGTH_ENV),
            }
        }
        self
    }

    /// [`Config::new`] plus the `MATCH_WORDS_MIN_LENGTH` override.
    pub fn from_env(word: Option<String>, dictionary: Option<PathBuf>) -> Self {
        let env_value = std::env::var(MIN_LENGTH_ENV).ok();
        Self::new(word, dictionary).with_min_length_override(env_value.as_deref())
    }
}

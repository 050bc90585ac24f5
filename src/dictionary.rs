//! Streaming word lists.
//!
//! A dictionary is plain text with one word per line. Lines are trimmed,
//! folded to lowercase and dropped when shorter than the minimum length.
//! Nothing is loaded up front: words are read as the iterator is consumed,
//! and the file is closed when the iterator is dropped.

use crate::error::DictionaryError;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use tracing::{debug, warn};

/// Minimum word length, in characters, when the caller has no preference.
pub const DEFAULT_MIN_LENGTH: usize = 2;

/// Open `path` and stream its words of at least `min_length` characters.
pub fn words<P: AsRef<Path>>(
    path: P,
    min_length: usize,
) -> Result<Words<BufReader<File>>, DictionaryError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DictionaryError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), min_length, "opened dictionary");
    Ok(words_from_reader(BufReader::new(file), min_length))
}

/// Stream words from any buffered reader.
pub fn words_from_reader<R: BufRead>(reader: R, min_length: usize) -> Words<R> {
    Words {
        lines: Some(reader.lines()),
        line_no: 0,
        min_length,
    }
}

/// Lazy sequence of normalized dictionary words.
///
/// Stops for good after the first read error.
#[derive(Debug)]
pub struct Words<R> {
    lines: Option<Lines<R>>,
    line_no: usize,
    min_length: usize,
}

impl<R: BufRead> Iterator for Words<R> {
    type Item = Result<String, DictionaryError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.as_mut()?.next();
            self.line_no += 1;
            match line {
                None => {
                    self.lines = None;
                    return None;
                }
                Some(Err(source)) => {
                    warn!(line = self.line_no, error = %source, "dictionary read failed");
                    self.lines = None;
                    return Some(Err(DictionaryError::Read {
                        line: self.line_no,
                        source,
                    }));
                }
                Some(Ok(line)) => {
                    let word = line.trim().to_lowercase();
                    if word.chars().count() >= self.min_length {
                        return Some(Ok(word));
                    }
                }
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for Words<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // "ёж" is two chars but four bytes
        let words: Vec<_> = words_from_reader(Cursor::new("ёж\nкот\n"), 3)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(words, vec!["кот".to_string()]);
    }

    #[test]
    fn test_invalid_utf8_reports_line_and_stops() {
        let data: &[u8] = b"one\n\xff\xfe\nthree\n";
        let mut iter = words_from_reader(Cursor::new(data), 2);
        assert_eq!(iter.next().unwrap().unwrap(), "one");
        match iter.next() {
            Some(Err(DictionaryError::Read { line, .. })) => assert_eq!(line, 2),
            other => panic!("expected read error, got {:?}", other),
        }
        assert!(iter.next().is_none());
    }
}

use std::path::PathBuf;
use thiserror::Error;

/// Failures while streaming a dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The dictionary file could not be opened.
    #[error("cannot open dictionary {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line could not be read (I/O failure or invalid UTF-8).
    #[error("cannot read dictionary line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// Writing a match to the output failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

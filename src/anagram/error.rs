use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a word list.
///
/// Loading is all-or-nothing: when one of these is returned, no index was built.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The word-list file could not be opened.
    #[error("could not open word list {}", .path.display())]
    Open {
        /// Path that was passed to the loader.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading from the word-list source failed part way through.
    #[error("could not read line {line} of word list")]
    Read {
        /// 1-based number of the line being read.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Errors returned for a query the index cannot answer.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// The query word was empty.
    #[error("query word is empty")]
    EmptyQuery,
}

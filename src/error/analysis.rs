//! Analysis error module.
//!
//! This module defines error types that may occur while loading a word list
//! for analysis. The trie queries themselves are infallible; only the I/O
//! around them can fail.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during word list analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Error when the word list file cannot be opened.
    #[error("Failed to open word list {}: {}", .path.display(), .source)]
    WordListOpen {
        /// The path that could not be opened
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: io::Error,
    },

    /// Error when reading from the word list fails mid-stream.
    #[error("Failed to read word list: {0}")]
    WordListRead(#[from] io::Error),
}

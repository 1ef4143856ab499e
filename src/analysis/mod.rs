// Copyright (c) 2025 Lei Words Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word list analysis.
//!
//! The driver-side collaborator around the Kui Word Trie: reads a word list
//! line by line, feeds the trie, and assembles a result record with the
//! ranked longest concatenated words and the total count. All I/O lives
//! here; the trie itself never reads anything.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data_structures::kui_trie::KuiTrie;
use crate::error::analysis::AnalysisError;

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Statistics from loading a word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    /// Words inserted into the trie
    pub words_loaded: usize,

    /// Lines skipped because they were empty after trimming
    pub blank_lines_skipped: usize,
}

/// Word list analyzer.
///
/// Owns a [`KuiTrie`] through its load phase and answers for it afterwards.
/// Words can be loaded from a file path or from any buffered reader; once
/// loading is done, [`report`](Self::report) runs the ranking and counting
/// queries and packages the outcome.
#[derive(Debug, Default)]
pub struct WordListAnalyzer {
    trie: KuiTrie,
    stats: LoadStats,
}

impl WordListAnalyzer {
    /// Creates an analyzer with an empty trie.
    pub fn new() -> Self {
        Self {
            trie: KuiTrie::new(),
            stats: LoadStats::default(),
        }
    }

    /// Loads words from the file at `path`, one word per line.
    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> AnalysisResult<LoadStats> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| AnalysisError::WordListOpen {
            path: path.to_path_buf(),
            source,
        })?;

        self.load_from_reader(BufReader::new(file))
    }

    /// Loads words from a buffered reader, one word per line.
    ///
    /// Every line is trimmed of surrounding whitespace before insertion.
    /// Lines that are empty after trimming are skipped and counted, so a
    /// trailing newline or a stray blank line never plants an empty word in
    /// the trie. Repeated calls keep loading into the same trie.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> AnalysisResult<LoadStats> {
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                self.stats.blank_lines_skipped += 1;
                continue;
            }

            self.trie.add_word(word);
            self.stats.words_loaded += 1;
        }

        debug!(
            words = self.stats.words_loaded,
            blank_lines = self.stats.blank_lines_skipped,
            "Word list loaded"
        );

        Ok(self.stats)
    }

    /// The trie built from the loaded words.
    pub fn trie(&self) -> &KuiTrie {
        &self.trie
    }

    /// Load statistics accumulated so far.
    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    /// Runs the ranking and counting queries and assembles the report.
    ///
    /// `top_words` is the number of longest concatenated words requested;
    /// when fewer exist in the list the report carries the absent marker
    /// rather than a partial ranking.
    pub fn report(&self, top_words: usize) -> AnalysisReport {
        let longest_concatenated = self.trie.find_longest_concatenated_word(top_words);
        let total_concatenated = self.trie.total_concatenated_words();

        debug!(
            requested = top_words,
            total = total_concatenated,
            ranked = longest_concatenated.is_some(),
            "Analysis complete"
        );

        AnalysisReport {
            stats: self.stats,
            requested: top_words,
            longest_concatenated,
            total_concatenated,
        }
    }
}

/// Result record for one analyzed word list.
///
/// The `Display` form is the human-readable report; the serde form feeds the
/// JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Load statistics for the analyzed list
    pub stats: LoadStats,

    /// How many ranked words were requested
    pub requested: usize,

    /// The `requested` longest concatenated words, longest first, or `None`
    /// when fewer exist in the list
    pub longest_concatenated: Option<Vec<String>>,

    /// Total count of concatenated words in the list
    pub total_concatenated: usize,
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "======== Result ========")?;

        match &self.longest_concatenated {
            Some(words) => {
                for (index, word) in words.iter().enumerate() {
                    writeln!(f, "{} longest concatenated word is: {}", index + 1, word)?;
                }
            }
            None => {
                writeln!(
                    f,
                    "fewer than {} concatenated words exist in the list",
                    self.requested
                )?;
            }
        }

        write!(
            f,
            "The total count of all the concatenated words in the file is {}",
            self.total_concatenated
        )
    }
}

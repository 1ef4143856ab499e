// Copyright (c) 2025 Lei Words Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Kui Word Trie for concatenated-word analysis.
//!
//! A prefix tree over a word list, combined with the recursive decomposition
//! test that decides whether a word can be split into two or more shorter
//! words from the same list. The trie also keeps a length-indexed registry of
//! every inserted word so the longest concatenated words can be ranked
//! without re-walking the tree.
//!
//! # Features
//!
//! - Plain owned tree: each node owns its children, no shared handles and no
//!   locking, matching the build-once-then-query lifecycle.
//! - Exact character matching only; no normalization, no fuzzy lookup.
//! - Infallible operations: every query accepts any string (including the
//!   empty string) and returns a defined value.
//! - Length buckets preserve insertion order, so ranking is deterministic for
//!   a given input order.
//!
//! # Example
//!
//! ```
//! use lei_words_lib::data_structures::kui_trie::KuiTrie;
//!
//! let mut trie = KuiTrie::new();
//! for word in ["cat", "dog", "catdog", "dogcat", "catdogcat"] {
//!     trie.add_word(word);
//! }
//!
//! assert!(trie.check_word_in_tree("catdog"));
//! assert!(trie.is_concatenated("catdogcat"));
//! assert_eq!(
//!     trie.find_longest_concatenated_word(1),
//!     Some(vec!["catdogcat".to_string()])
//! );
//! assert_eq!(trie.total_concatenated_words(), 3);
//! ```

mod node;

use std::collections::BTreeMap;

pub use node::TrieNode;

#[cfg(test)]
mod tests;

/// Kui Word Trie: a prefix tree plus a length-indexed word registry.
///
/// Key properties:
/// * Single-threaded and synchronous; built once during a load phase, then
///   queried read-only.
/// * The registry and the trie always describe the same logical word set,
///   kept in sync by [`add_word`](Self::add_word) alone.
/// * Word length means character count, not byte count.
#[derive(Debug, Clone)]
pub struct KuiTrie {
    /// The root node of the trie.
    root: TrieNode,

    /// Words grouped by character count, insertion order kept per bucket.
    /// Ordered keys give the longest-to-shortest scan used for ranking.
    words_by_length: BTreeMap<usize, Vec<String>>,
}

impl KuiTrie {
    /// Creates a new empty `KuiTrie`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            words_by_length: BTreeMap::new(),
        }
    }

    /// Inserts a word into the trie and registers it under its length.
    ///
    /// The caller strips surrounding whitespace beforehand; the trie stores
    /// exactly what it is given. Always succeeds, for any finite character
    /// sequence. Inserting the empty string marks the root itself terminal
    /// and registers the empty word under length 0.
    ///
    /// Re-inserting an exact duplicate re-marks the same terminal node (a
    /// no-op) but appends a second registry entry; duplicates are not
    /// deduplicated, so counting operations see them twice.
    pub fn add_word(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.child_or_create(ch);
        }
        node.set_is_word(true);

        let length = word.chars().count();
        self.words_by_length
            .entry(length)
            .or_default()
            .push(word.to_string());
    }

    /// Lists every prefix of `word` that is itself a complete trie word,
    /// ordered shortest to longest.
    ///
    /// Walks `word` one character at a time from the root and records the
    /// consumed prefix whenever the node just stepped into is terminal. The
    /// walk stops at the first character with no matching edge; the rest of
    /// `word` is not examined. `word` itself appears last when it is a
    /// complete trie word. The empty prefix is never reported, even when the
    /// root is terminal, because terminality is only observed after at least
    /// one step.
    pub fn list_prefixes(&self, word: &str) -> Vec<String> {
        let mut prefixes = Vec::new();
        let mut consumed = String::new();
        let mut node = &self.root;

        for ch in word.chars() {
            match node.get_child(ch) {
                Some(child) => {
                    consumed.push(ch);
                    if child.is_word() {
                        prefixes.push(consumed.clone());
                    }
                    node = child;
                }
                None => return prefixes,
            }
        }

        prefixes
    }

    /// Whether `word` was inserted as a complete word.
    ///
    /// The empty string returns true iff the root is marked terminal (i.e.
    /// the empty word was inserted).
    pub fn check_word_in_tree(&self, word: &str) -> bool {
        let mut node = &self.root;
        for ch in word.chars() {
            match node.get_child(ch) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.is_word()
    }

    /// Whether `word` can be split into two or more non-empty trie words.
    ///
    /// Recursive, no memoization; depth is bounded by the word's length.
    /// For each dictionary prefix of `word` (shortest first), the remaining
    /// suffix either matches a complete word directly, which succeeds
    /// immediately with a two-part split, or is tested recursively.
    ///
    /// A successful recursive test does not end the prefix loop: later
    /// prefix branches still run and the final answer is the result of the
    /// last recursive call made. The direct two-part match is the only early
    /// exit. See `test_recursion_result_reflects_last_prefix_branch` in the
    /// tests for a word list where this distinction changes the answer.
    ///
    /// The empty string is not a concatenation, and a whole-word self-match
    /// contributes nothing: at least two non-empty parts must be found.
    pub fn is_concatenated(&self, word: &str) -> bool {
        let mut concatenated = false;
        if word.is_empty() {
            return concatenated;
        }

        for prefix in self.list_prefixes(word) {
            // The prefix is built from word's own leading characters, so the
            // byte offset is a character boundary of word.
            let suffix = &word[prefix.len()..];
            if suffix.is_empty() {
                continue;
            }
            if self.check_word_in_tree(suffix) {
                return true;
            }
            concatenated = self.is_concatenated(suffix);
        }

        concatenated
    }

    /// Returns the `n` longest concatenated words, or `None` if fewer than
    /// `n` exist.
    ///
    /// Scans length buckets longest to shortest, insertion order within each
    /// bucket, and returns the collected words the moment `n` have been
    /// found. The contract is all-or-nothing: when the scan exhausts every
    /// bucket with fewer than `n` matches the result is `None`, never the
    /// partial list. `n == 0` returns `Some(vec![])` without scanning.
    pub fn find_longest_concatenated_word(&self, n: usize) -> Option<Vec<String>> {
        let mut found = Vec::new();
        if n == 0 {
            return Some(found);
        }

        for bucket in self.words_by_length.values().rev() {
            for word in bucket {
                if self.is_concatenated(word) {
                    found.push(word.clone());
                    if found.len() == n {
                        return Some(found);
                    }
                }
            }
        }

        None
    }

    /// Counts every registered word that passes the decomposition test.
    ///
    /// Full independent scan; registry duplicates are counted each time they
    /// appear.
    pub fn total_concatenated_words(&self) -> usize {
        self.words_by_length
            .values()
            .flatten()
            .filter(|word| self.is_concatenated(word))
            .count()
    }

    /// Number of registry entries, duplicates included.
    pub fn word_count(&self) -> usize {
        self.words_by_length.values().map(Vec::len).sum()
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.words_by_length.is_empty()
    }
}

impl Default for KuiTrie {
    fn default() -> Self {
        Self::new()
    }
}

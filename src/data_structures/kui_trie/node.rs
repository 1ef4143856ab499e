// Copyright (c) 2025 Lei Words Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Kui Word Trie.
//!
//! This module provides the TrieNode structure used in the Kui Trie
//! implementation. Each node owns its children outright, so the whole trie is
//! a strict tree: no shared handles, no back-references, no locking.

use std::collections::hash_map::Entry;

use fnv::FnvHashMap;

/// A node in the Kui Word Trie.
///
/// Each node represents one character step along an inserted word. Terminal
/// nodes mark the exact end of a complete word.
#[derive(Debug, Clone)]
pub struct TrieNode {
    /// Map of characters to owned child nodes. One entry per distinct next
    /// character; created lazily during insertion and never removed.
    children: FnvHashMap<char, TrieNode>,

    /// Set iff some inserted word's character sequence ends exactly here.
    is_word: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: FnvHashMap::default(),
            is_word: false,
        }
    }

    /// Returns the child reached by `ch`, or `None` if no such edge exists.
    pub fn get_child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Creates a fresh child for `ch`, replacing any existing edge, and
    /// returns it for further threading.
    ///
    /// Insertion only calls this for characters with no edge yet (it follows
    /// existing edges via [`child_or_create`](Self::child_or_create)), so the
    /// replacement path never discards a live subtree.
    pub fn add_child(&mut self, ch: char) -> &mut TrieNode {
        match self.children.entry(ch) {
            Entry::Occupied(mut slot) => {
                slot.insert(TrieNode::new());
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(TrieNode::new()),
        }
    }

    /// Follows the existing edge for `ch`, growing an empty child on first
    /// use. This is the single downward step insertion takes per character.
    pub fn child_or_create(&mut self, ch: char) -> &mut TrieNode {
        self.children.entry(ch).or_default()
    }

    /// Sets the terminal-word marker. Idempotent.
    pub fn set_is_word(&mut self, is_word: bool) {
        self.is_word = is_word;
    }

    /// Whether a complete inserted word ends at this node.
    pub fn is_word(&self) -> bool {
        self.is_word
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}

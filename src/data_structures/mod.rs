//! Data structures for the Lei Words analyzer.
//!
//! This module contains the core data structure of the project: a word trie
//! with the decomposition and ranking queries built on top of it. All
//! implementations adhere to the strict project requirements:
//! - No unsafe code
//! - Single-threaded, build-once-then-query lifecycle
//! - No I/O inside the data structures

pub mod kui_trie;

// Re-export common data structures
pub use kui_trie::{KuiTrie, TrieNode};

//! Test modules for the Lei Words analyzer.
//!
//! This module contains all testing infrastructure, including:
//! - Unit tests for each component
//! - Integration tests for cross-component functionality
//! - Property-based tests using proptest
//! - Test fixtures and utilities
//!
//! The test philosophy follows the project standards:
//! - Testing all error paths and edge cases
//! - Property-based testing over generated word lists
//! - Pinning tests for the exact decomposition and ranking behavior


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_list_strategy, word_strategy, TestFixture};

//! Lei Words Library
//!
//! This library contains the core components of the Lei Words analyzer: the
//! Kui Word Trie with its concatenated-word queries, the word list analyzer
//! built around it, and the configuration and error handling layers. The
//! library is designed to be used by the binary crate, but can also be used
//! as a dependency by other projects.
//!
//! # Architecture
//!
//! The Lei Words analyzer is designed with the following principles in mind:
//! - Strict component boundaries: the trie is pure data structure, all I/O
//!   lives in the analysis layer
//! - Build once, query read-only afterwards
//! - Comprehensive error handling and propagation in the driver layer,
//!   infallible operations in the core

// Re-export public modules
pub mod analysis;
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for the Lei Words analyzer.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::LeiResult<()> {
    // Set up global error reporter with tracing
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}

//! Error types surfaced by configuration and generation.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors reported by the world generation entry points.
///
/// Generation itself is a total, deterministic computation; everything here
/// is either a configuration problem caught before any column is computed,
/// or an explicit cancellation of the batch.
#[derive(Debug, Error)]
pub enum WorldGenError {
    /// The externally supplied seed string is not an integer.
    #[error("invalid world seed {input:?}")]
    InvalidSeed {
        /// The rejected input.
        input: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The batch was cancelled before emission completed.
    #[error("world generation cancelled")]
    Cancelled,
}

//! Error types for text-metrics-core.
//!
//! The counting and scoring functions themselves never fail. These errors
//! belong to the layers around them: configuration loading and the
//! report layer that refuses to hand out non-finite scores.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while building a readability report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The text has no words or no sentence boundaries, so the
    /// Flesch-Kincaid ratios are undefined.
    #[error("no scorable text in input ({words} words, {sentences} sentences)")]
    Degenerate {
        /// Number of words counted.
        words: usize,
        /// Number of sentence boundaries counted.
        sentences: usize,
    },

    /// The input exceeds the configured byte limit.
    #[error("input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge {
        /// Size of the rejected input in bytes.
        size: usize,
        /// The configured limit in bytes.
        limit: usize,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;

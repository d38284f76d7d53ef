//! Core library for text-metrics.
//!
//! Estimates English readability from three counts (words, sentences and
//! heuristic syllables) combined through the Flesch reading-ease and
//! Flesch-Kincaid grade-level formulas.
//!
//! # Modules
//!
//! - [`text`] - Word and sentence counters
//! - [`syllables`] - Spelling-pattern syllable estimator and its rule data
//! - [`readability`] - Scores, reports and thresholds
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! Every counting and scoring function is a pure function of its input.
//! The rule set and corner-case table are compiled once and shared
//! read-only across threads.
//!
//! # Quick Start
//!
//! ```
//! use text_metrics_core::{count_sentences, count_words, flesch_kincaid, syllables_in};
//!
//! let text = "The cat sat on the mat. It was happy.";
//! assert_eq!(count_words(text), 9);
//! assert_eq!(count_sentences(text), 2);
//! assert_eq!(syllables_in("cafe"), 2);
//!
//! let (score, grade) = flesch_kincaid(text);
//! assert!(score > grade);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod readability;
pub mod syllables;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use readability::{
    ReadabilityOptions, ReadabilityReport, SyllableMode, TextMetrics, check_readability,
    flesch_kincaid, flesch_kincaid_with,
};
pub use syllables::{in_bytes, syllables_in};
pub use text::{count_sentences, count_words};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

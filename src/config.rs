//! Configuration types for parsing and metrics.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - how strictly export text is parsed
//! - [`MetricsConfig`] - stop-word matching and table sizes
//! - [`AnalysisConfig`] - both of the above, loadable from a JSON file
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{MetricsConfig, ParserConfig, StopWordMatching};
//! use chatlens::parser::ExportParser;
//!
//! let parser = ExportParser::with_config(ParserConfig::new().with_skip_invalid(true));
//!
//! let metrics = MetricsConfig::new()
//!     .with_stop_word_matching(StopWordMatching::Substring)
//!     .with_top_words(10);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for export parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
///
/// let config = ParserConfig::new().with_skip_invalid(true);
/// assert!(config.skip_invalid);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Drop messages whose header fails the timestamp parse instead of
    /// rejecting the whole export (default: false)
    pub skip_invalid: bool,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether unparsable messages are dropped.
    #[must_use]
    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }
}

/// How a token is tested against the stop-word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWordMatching {
    /// The token must equal one of the listed words.
    #[default]
    Exact,
    /// The token is dropped if it occurs anywhere in the list's raw text,
    /// so `"he"` is dropped by a list containing `"the"`.
    Substring,
}

impl std::fmt::Display for StopWordMatching {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopWordMatching::Exact => write!(f, "exact"),
            StopWordMatching::Substring => write!(f, "substring"),
        }
    }
}

/// Configuration for the metrics engine.
///
/// # Example
///
/// ```rust
/// use chatlens::config::MetricsConfig;
///
/// let config = MetricsConfig::default();
/// assert_eq!(config.top_words, 20);
/// assert_eq!(config.top_senders, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Stop-word matching mode (default: exact)
    pub stop_word_matching: StopWordMatching,

    /// Number of rows in the most-common-words table (default: 20)
    pub top_words: usize,

    /// Number of rows in the most-active-senders table (default: 5)
    pub top_senders: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            stop_word_matching: StopWordMatching::Exact,
            top_words: 20,
            top_senders: 5,
        }
    }
}

impl MetricsConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stop-word matching mode.
    #[must_use]
    pub fn with_stop_word_matching(mut self, matching: StopWordMatching) -> Self {
        self.stop_word_matching = matching;
        self
    }

    /// Sets the size of the most-common-words table.
    #[must_use]
    pub fn with_top_words(mut self, limit: usize) -> Self {
        self.top_words = limit;
        self
    }

    /// Sets the size of the most-active-senders table.
    #[must_use]
    pub fn with_top_senders(mut self, limit: usize) -> Self {
        self.top_senders = limit;
        self
    }
}

/// Complete analysis configuration.
///
/// Every field is optional in the serialized form; missing fields take
/// their defaults.
///
/// ```rust
/// use chatlens::config::{AnalysisConfig, StopWordMatching};
///
/// let config: AnalysisConfig =
///     serde_json::from_str(r#"{"metrics": {"stop_word_matching": "substring"}}"#)?;
/// assert_eq!(config.metrics.stop_word_matching, StopWordMatching::Substring);
/// assert_eq!(config.metrics.top_words, 20);
/// assert!(!config.parser.skip_invalid);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub parser: ParserConfig,
    pub metrics: MetricsConfig,
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from a JSON file.
    #[cfg(feature = "json-output")]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&content)?;
        tracing::info!(config_file = %path.as_ref().display(), "Loaded analysis configuration");
        Ok(config)
    }
}

//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers every
//! failure the library can report. Parsing is the only stage that can reject
//! input: once a [`RecordSet`](crate::RecordSet) exists, every metric is total
//! and returns empty or zero results instead of errors.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get a clear "not a valid export" message
//! - **Developers** get source error chains for debugging

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::RecordSet;
///
/// fn load(raw: &str) -> Result<RecordSet> {
///     chatlens::parse(raw)
/// }
/// # assert!(load("").is_err());
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The export, stop-word list or config file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a chat export this crate understands.
    ///
    /// This occurs when:
    /// - The text is empty
    /// - No line starts with a recognizable `D/M/YY, H:MM - ` header
    /// - An output path has an unknown extension
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// A message header could not be read as a canonical timestamp.
    ///
    /// Raised for 12-hour headers that neither date interpretation could
    /// convert, and for headers carrying a four-digit year in 24-hour form.
    #[error("Unparsable timestamp header '{header}' on line {line}")]
    Timestamp {
        /// 1-based line number of the header in the normalized text
        line: usize,
        /// The header text as it appeared after normalization
        header: String,
    },

    /// A sender filter named nobody present in the record set.
    #[error("No participant named '{name}' in this chat")]
    UnknownSender {
        /// The requested participant name
        name: String,
    },

    /// A tone classifier failed or returned the wrong number of labels.
    #[error("Tone classifier error: {message}")]
    Classifier {
        /// Description of what went wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing/serialization error.
    ///
    /// This can occur when loading a config file or writing JSON output.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates the error reported when the input is not a chat export.
    pub fn not_an_export(message: impl Into<String>) -> Self {
        Self::invalid_format("WhatsApp TXT", message)
    }

    /// Creates a timestamp error for the header at `line`.
    pub fn timestamp(line: usize, header: impl Into<String>) -> Self {
        ChatlensError::Timestamp {
            line,
            header: header.into(),
        }
    }

    /// Creates an unknown sender error.
    pub fn unknown_sender(name: impl Into<String>) -> Self {
        ChatlensError::UnknownSender { name: name.into() }
    }

    /// Creates a classifier error.
    pub fn classifier(message: impl Into<String>) -> Self {
        ChatlensError::Classifier {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a timestamp error.
    pub fn is_timestamp(&self) -> bool {
        matches!(self, ChatlensError::Timestamp { .. })
    }

    /// Returns `true` if the input was rejected as a chat export.
    ///
    /// Both an unrecognizable file and a header that fails the canonical
    /// timestamp parse mean the same thing to a caller: not a valid export.
    pub fn is_malformed_input(&self) -> bool {
        self.is_invalid_format() || self.is_timestamp()
    }
}

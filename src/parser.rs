//! WhatsApp TXT export parser.
//!
//! Turns the raw text of an Android-style export into a [`RecordSet`]:
//!
//! ```text
//! 12/05/23, 09:00 - Alice: Hello there
//! 12/05/23, 09:05 - Bob: <Media omitted>
//! 12/05/23, 09:10 - Alice added Carol
//! ```
//!
//! Both clock styles are accepted; 12-hour headers (`9:00 AM - `) are
//! rewritten to 24-hour form before splitting. See [`crate::parsing::header`]
//! for the exact header grammar.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::ExportParser;
//!
//! let parser = ExportParser::new();
//! let records = parser.parse_str("12/05/23, 9:00 PM - Alice: Hello\nsecond line")?;
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records.records()[0].hour(), 21);
//! assert_eq!(records.records()[0].body(), "Hello\nsecond line");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::ParserConfig;
use crate::error::{ChatlensError, Result};
use crate::parsing::{normalize_headers, parse_canonical_timestamp, split_messages, split_sender};
use crate::record::MessageRecord;
use crate::record_set::RecordSet;

/// A small group chat in 12-hour export format, for demos and tests.
pub const SAMPLE_EXPORT: &str = include_str!("../data/sample_chat.txt");

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::parser::ExportParser;
///
/// let parser = ExportParser::new();
/// let records = parser.parse("WhatsApp Chat with Alice.txt".as_ref())?;
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExportParser {
    config: ParserConfig,
}

impl ExportParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses an export file.
    pub fn parse(&self, path: &Path) -> Result<RecordSet> {
        let bytes = fs::read(path)?;
        self.parse_bytes(bytes)
    }

    /// Parses an uploaded export, which must be UTF-8.
    pub fn parse_bytes(&self, bytes: Vec<u8>) -> Result<RecordSet> {
        let content = String::from_utf8(bytes).map_err(|source| ChatlensError::Utf8 {
            context: "chat export".to_string(),
            source,
        })?;
        self.parse_content(&content)
    }

    /// Parses export text already in memory.
    pub fn parse_str(&self, content: &str) -> Result<RecordSet> {
        self.parse_content(content)
    }

    fn parse_content(&self, content: &str) -> Result<RecordSet> {
        if content.trim().is_empty() {
            return Err(ChatlensError::not_an_export("the export is empty"));
        }

        // Pass 1: 12-hour headers -> canonical headers
        let normalized = normalize_headers(content);
        debug!(
            converted = normalized.converted,
            unconverted = normalized.unconverted.len(),
            "Normalized 12-hour headers"
        );

        if let Some(first) = normalized.unconverted.first() {
            if !self.config.skip_invalid {
                return Err(ChatlensError::timestamp(first.line, first.header.trim_end()));
            }
            for header in &normalized.unconverted {
                warn!(
                    line = header.line,
                    header = header.header.trim_end(),
                    "Unreadable 12-hour header kept as text of the previous message"
                );
            }
        }

        // Pass 2: split on canonical headers
        let chunks = split_messages(&normalized.text);
        if chunks.is_empty() {
            return Err(ChatlensError::not_an_export(
                "no line starts with a `D/M/YY, H:MM - ` message header",
            ));
        }

        let mut records = Vec::with_capacity(chunks.len());
        let mut skipped = 0usize;

        for chunk in &chunks {
            let Some(timestamp) = parse_canonical_timestamp(chunk.date, chunk.time) else {
                if self.config.skip_invalid {
                    warn!(
                        line = chunk.line,
                        header = chunk.header.trim_end(),
                        "Skipping message with unparsable header"
                    );
                    skipped += 1;
                    continue;
                }
                return Err(ChatlensError::timestamp(chunk.line, chunk.header.trim_end()));
            };

            let (sender, body) = split_sender(chunk.body);
            records.push(MessageRecord::new(
                timestamp,
                sender,
                body.trim_end_matches(['\r', '\n']),
            ));
        }

        info!(
            messages = records.len(),
            skipped,
            "Parsed WhatsApp export"
        );

        RecordSet::new(records)
    }
}

/// Parses export text with the default configuration.
///
/// ```rust
/// let records = chatlens::parse("12/05/23, 09:00 - Alice: Hello there")?;
/// assert_eq!(records.records()[0].sender().as_str(), "Alice");
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn parse(raw_text: &str) -> Result<RecordSet> {
    ExportParser::new().parse_str(raw_text)
}

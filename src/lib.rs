//! # Chatlens
//!
//! A Rust library for parsing WhatsApp chat exports and computing
//! per-participant activity statistics.
//!
//! ## Overview
//!
//! Chatlens reads the plain-text export WhatsApp produces ("Export chat" →
//! "Without media") and turns it into an ordered [`RecordSet`] of
//! [`MessageRecord`]s. On top of that it computes:
//! - message, word, media and link counts
//! - the most active senders and their share of the conversation
//! - word-cloud input and most common words, with stop-word removal
//! - emoji frequencies
//! - monthly and daily timelines, busiest weekdays and months
//! - a weekday-by-hour activity heatmap
//!
//! Every metric can be computed for the whole chat ("Overall") or for a single
//! participant.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let set = chatlens::parse(
//!         "12/05/23, 09:00 - Alice: Hello there\n\
//!          12/05/23, 09:05 - Bob: <Media omitted>\n\
//!          12/05/23, 09:10 - Alice added Carol",
//!     )?;
//!
//!     let report = analyze(&set, &SenderFilter::Overall, &StopWords::empty(), &MetricsConfig::default());
//!     assert_eq!(report.basic_counts.messages, 3);
//!     assert_eq!(report.basic_counts.media, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ExportParser`](parser::ExportParser) and [`parse`]
//! - [`parsing`] - header normalization, message splitting, sender detection
//! - [`record`], [`record_set`] - [`MessageRecord`], [`Sender`](record::Sender), [`RecordSet`]
//! - [`metrics`] - filters, counts, words, emoji, timelines, [`analyze`](metrics::analyze)
//! - [`tone`] - tone tagging through a pluggable [`ToneClassifier`](tone::ToneClassifier)
//! - [`config`] - parser and metrics configuration
//! - [`format`], [`output`] - CSV / JSON / JSONL record export and JSON reports
//! - [`cli`], [`logging`] - CLI types (feature `cli`)
//! - [`error`] - Unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod metrics;
pub mod output;
pub mod parser;
pub mod parsing;
pub mod record;
pub mod record_set;
pub mod tone;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use parser::parse;
pub use record::MessageRecord;
pub use record_set::RecordSet;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Records
    pub use crate::record::{MessageRecord, Sender};
    pub use crate::record_set::RecordSet;

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parser::{ExportParser, parse};

    // Configuration
    pub use crate::config::{AnalysisConfig, MetricsConfig, ParserConfig, StopWordMatching};

    // Metrics
    pub use crate::metrics::{
        AnalysisReport, Selection, SenderFilter, StopWords, Tally, activity_heatmap, analyze,
        basic_counts, daily_timeline, emoji_counts, month_activity, monthly_timeline,
        top_senders, top_words, weekday_activity, word_cloud_input,
    };

    // Tone
    pub use crate::tone::{Tone, ToneClassifier, tag_tones, tone_distribution};

    // Output
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
    pub use crate::output::OutputConfig;

    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};

    #[cfg(feature = "json-output")]
    pub use crate::output::{report_to_json, to_json, to_jsonl, write_json, write_jsonl, write_report_json};
}

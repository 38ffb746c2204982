//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`LogLevel`] - Verbosity of the diagnostic log on stderr
//!
//! ```rust
//! use chatlens::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::try_parse_from(["chatlens", "chat.txt", "-u", "Alice"]).unwrap();
//! assert_eq!(args.user.as_deref(), Some("Alice"));
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Analyze a WhatsApp chat export: message counts, top words and emoji,
/// activity timelines and a weekday-by-hour heatmap.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens \"WhatsApp Chat with Alice.txt\"
    chatlens chat.txt --list-users
    chatlens chat.txt -u Alice --top-words 10
    chatlens chat.txt --json report.json --records records.csv
    chatlens --sample")]
pub struct Args {
    /// Path to the exported chat (.txt)
    #[arg(required_unless_present = "sample", conflicts_with = "sample")]
    pub input: Option<String>,

    /// Analyze the bundled sample chat instead of a file
    #[arg(long)]
    pub sample: bool,

    /// Restrict the analysis to one participant
    #[arg(short, long, value_name = "USER")]
    pub user: Option<String>,

    /// Print the participants and exit
    #[arg(long)]
    pub list_users: bool,

    /// Stop-word list, whitespace separated (default: bundled Hinglish list)
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Drop tokens that appear anywhere inside the stop-word text
    #[arg(long)]
    pub substring_stop_words: bool,

    /// Number of most common words to report
    #[arg(long, value_name = "N")]
    pub top_words: Option<usize>,

    /// JSON analysis configuration
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the full report as JSON
    #[arg(long, value_name = "FILE")]
    pub json: Option<String>,

    /// Export parsed records; format follows the extension (csv, json, jsonl)
    #[arg(long, value_name = "FILE")]
    pub records: Option<String>,

    /// Skip messages with unreadable headers instead of failing
    #[arg(long)]
    pub skip_invalid: bool,

    /// Log verbosity on stderr (overridden by RUST_LOG)
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

/// Log verbosity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The directive understood by `EnvFilter`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

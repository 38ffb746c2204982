//! Record and report writers.
//!
//! Record exports carry one row per parsed message:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one record per line - requires `json-output` feature
//!
//! The full metrics report is written with [`write_report_json`] /
//! [`report_to_json`].
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::output::{OutputConfig, to_csv, write_jsonl};
//!
//! let set = chatlens::parse("12/05/23, 09:00 - Alice: Hello\n12/05/23, 09:01 - Bob: Hi")?;
//!
//! write_jsonl(&set, "records.jsonl", &OutputConfig::new().with_derived_fields())?;
//! let csv = to_csv(&set, &OutputConfig::new())?;
//! assert!(csv.starts_with("Timestamp;Sender;Body"));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{report_to_json, to_json, write_json, write_report_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

use serde::{Deserialize, Serialize};

#[cfg(any(feature = "csv-output", feature = "json-output"))]
use crate::record::MessageRecord;

/// Timestamp layout used by every record export.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Which columns a record export contains.
///
/// Timestamp, sender and body are always written. The calendar fields
/// derived at parse time are opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Include date, year, month, day, weekday, hour, minute and hour band
    pub include_derived: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_derived_fields(mut self) -> Self {
        self.include_derived = true;
        self
    }
}

/// One exported record.
#[cfg(any(feature = "csv-output", feature = "json-output"))]
#[derive(Debug, Serialize)]
pub(crate) struct ExportRow<'a> {
    timestamp: String,
    sender: &'a str,
    body: &'a str,
    #[serde(flatten)]
    derived: Option<DerivedColumns<'a>>,
}

#[cfg(any(feature = "csv-output", feature = "json-output"))]
#[derive(Debug, Serialize)]
pub(crate) struct DerivedColumns<'a> {
    date: String,
    year: i32,
    month_num: u32,
    month_name: &'a str,
    day: u32,
    day_name: &'a str,
    hour: u32,
    minute: u32,
    hour_band: &'a str,
}

#[cfg(any(feature = "csv-output", feature = "json-output"))]
impl<'a> ExportRow<'a> {
    /// CSV header names, in column order.
    #[cfg(feature = "csv-output")]
    pub(crate) fn header(config: &OutputConfig) -> Vec<&'static str> {
        let mut header = vec!["Timestamp", "Sender", "Body"];
        if config.include_derived {
            header.extend([
                "Date", "Year", "Month", "MonthName", "Day", "DayName", "Hour", "Minute",
                "HourBand",
            ]);
        }
        header
    }

    pub(crate) fn new(record: &'a MessageRecord, config: &OutputConfig) -> Self {
        Self {
            timestamp: record.timestamp().format(TIMESTAMP_FORMAT).to_string(),
            sender: record.sender().as_str(),
            body: record.body(),
            derived: config.include_derived.then(|| DerivedColumns {
                date: record.date().to_string(),
                year: record.year(),
                month_num: record.month_num(),
                month_name: record.month_name(),
                day: record.day(),
                day_name: record.day_name(),
                hour: record.hour(),
                minute: record.minute(),
                hour_band: record.hour_band(),
            }),
        }
    }

    /// CSV cells, in the order of [`header`](Self::header).
    #[cfg(feature = "csv-output")]
    pub(crate) fn cells(&self) -> Vec<String> {
        let mut cells = vec![
            self.timestamp.clone(),
            self.sender.to_string(),
            self.body.to_string(),
        ];
        if let Some(d) = &self.derived {
            cells.extend([
                d.date.clone(),
                d.year.to_string(),
                d.month_num.to_string(),
                d.month_name.to_string(),
                d.day.to_string(),
                d.day_name.to_string(),
                d.hour.to_string(),
                d.minute.to_string(),
                d.hour_band.to_string(),
            ]);
        }
        cells
    }
}

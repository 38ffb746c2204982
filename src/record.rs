//! Parsed message records.
//!
//! This module provides [`MessageRecord`], one per message in a chat export,
//! and [`Sender`], the classification of who wrote it. Calendar fields used
//! for bucketing (date, month name, weekday name, hour band, ...) are derived
//! once at construction and never change afterwards.
//!
//! # Examples
//!
//! ```
//! use chatlens::record::{MessageRecord, Sender};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 5, 12)
//!     .unwrap()
//!     .and_hms_opt(23, 40, 0)
//!     .unwrap();
//! let record = MessageRecord::new(ts, Sender::participant("Alice"), "Hello there");
//!
//! assert_eq!(record.sender().as_str(), "Alice");
//! assert_eq!(record.day_name(), "Friday");
//! assert_eq!(record.month_name(), "May");
//! assert_eq!(record.hour_band(), "23-00");
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};

/// Sender value reserved for system lines (joins, leaves, subject changes).
pub const NOTIFICATION_SENDER: &str = "group_notification";

/// Body text the export writes in place of an attachment that was not included.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// Who wrote a message.
///
/// Every record carries exactly one classification: a human participant or
/// the notification sentinel. Serializes as a plain string, with
/// [`NOTIFICATION_SENDER`] standing in for system lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sender {
    /// A human participant, identified by the name shown in the export.
    Participant(String),
    /// A system-generated line with no author.
    Notification,
}

impl Sender {
    /// Creates a participant sender.
    pub fn participant(name: impl Into<String>) -> Self {
        Sender::Participant(name.into())
    }

    /// Returns the sender as it appears in tables and exports.
    pub fn as_str(&self) -> &str {
        match self {
            Sender::Participant(name) => name,
            Sender::Notification => NOTIFICATION_SENDER,
        }
    }

    /// Returns `true` for system-generated lines.
    pub fn is_notification(&self) -> bool {
        matches!(self, Sender::Notification)
    }

    /// Returns the participant name, or `None` for system lines.
    pub fn name(&self) -> Option<&str> {
        match self {
            Sender::Participant(name) => Some(name),
            Sender::Notification => None,
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Sender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Returns the one-hour band label for `hour`.
///
/// Hours `0..=22` map to `"{h}-{h+1}"`; hour 23 wraps to `"23-00"`.
///
/// ```
/// use chatlens::record::hour_band;
///
/// assert_eq!(hour_band(0), "0-1");
/// assert_eq!(hour_band(9), "9-10");
/// assert_eq!(hour_band(23), "23-00");
/// ```
pub fn hour_band(hour: u32) -> String {
    if hour == 23 {
        "23-00".to_string()
    } else {
        format!("{}-{}", hour, hour + 1)
    }
}

/// Full English weekday names, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Full English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A single parsed chat message.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Send time, minute precision, export-local |
/// | `sender` | [`Sender`] | Participant or notification sentinel |
/// | `body` | `String` | Message text, trailing line breaks removed |
/// | `date` | `NaiveDate` | Calendar date, for daily bucketing |
/// | `year`, `month_num`, `day` | integers | Calendar components |
/// | `month_name`, `day_name` | `String` | English names (`"May"`, `"Friday"`) |
/// | `hour`, `minute` | `u32` | Clock components |
/// | `hour_band` | `String` | See [`hour_band`] |
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageRecord {
    timestamp: NaiveDateTime,
    sender: Sender,
    body: String,
    date: NaiveDate,
    year: i32,
    month_num: u32,
    month_name: String,
    day: u32,
    day_name: String,
    hour: u32,
    minute: u32,
    hour_band: String,
}

impl MessageRecord {
    /// Creates a record and derives its calendar fields from `timestamp`.
    pub fn new(timestamp: NaiveDateTime, sender: Sender, body: impl Into<String>) -> Self {
        let month_num = timestamp.month();
        let hour = timestamp.hour();

        Self {
            timestamp,
            sender,
            body: body.into(),
            date: timestamp.date(),
            year: timestamp.year(),
            month_num,
            month_name: MONTH_NAMES[month_num as usize - 1].to_string(),
            day: timestamp.day(),
            day_name: WEEKDAY_NAMES[timestamp.weekday().num_days_from_monday() as usize]
                .to_string(),
            hour,
            minute: timestamp.minute(),
            hour_band: hour_band(hour),
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month_num(&self) -> u32 {
        self.month_num
    }

    pub fn month_name(&self) -> &str {
        &self.month_name
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn day_name(&self) -> &str {
        &self.day_name
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn hour_band(&self) -> &str {
        &self.hour_band
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns `true` if the body is exactly the media placeholder.
    pub fn is_media(&self) -> bool {
        self.body == MEDIA_OMITTED
    }

    /// Returns `true` if this is a system line.
    pub fn is_notification(&self) -> bool {
        self.sender.is_notification()
    }

    /// Number of whitespace-separated tokens in the body.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }
}

//! Restrict metrics to one participant.
//!
//! This module provides [`SenderFilter`], the "Overall or one person" choice
//! every metric is computed under, and [`Selection`], the borrowed view of a
//! [`RecordSet`](crate::RecordSet) that metrics consume.
//!
//! # Examples
//!
//! ```
//! use chatlens::metrics::filter::SenderFilter;
//!
//! let set = chatlens::parse("1/2/23, 10:00 - Alice: Hi\n1/2/23, 10:05 - Bob: Hello")?;
//!
//! let choices = SenderFilter::choices(&set);
//! assert_eq!(choices, vec!["Overall", "Alice", "Bob"]);
//!
//! let alice: SenderFilter = "Alice".parse().unwrap();
//! assert_eq!(set.select(&alice).len(), 1);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```
//!
//! # Behavior Notes
//!
//! - Matching is exact and case-sensitive, as names appear in the export
//! - System lines are never matched by a participant filter, even one named
//!   `group_notification`
//! - [`SenderFilter::Overall`] keeps system lines; whether a metric counts
//!   them is up to the metric

use serde::{Deserialize, Serialize};

use crate::record::MessageRecord;
use crate::record_set::RecordSet;

/// Label of the all-participants choice.
pub const OVERALL: &str = "Overall";

/// Which records a metric looks at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderFilter {
    /// Every record, system lines included.
    #[default]
    Overall,
    /// Only records written by this participant.
    Participant(String),
}

impl SenderFilter {
    /// Creates a filter for one participant.
    pub fn participant(name: impl Into<String>) -> Self {
        SenderFilter::Participant(name.into())
    }

    /// Returns `true` for the all-participants choice.
    pub fn is_overall(&self) -> bool {
        matches!(self, SenderFilter::Overall)
    }

    /// Returns the label shown for this choice.
    pub fn label(&self) -> &str {
        match self {
            SenderFilter::Overall => OVERALL,
            SenderFilter::Participant(name) => name,
        }
    }

    /// Returns `true` if `record` passes this filter.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            SenderFilter::Overall => true,
            SenderFilter::Participant(name) => record.sender().name() == Some(name.as_str()),
        }
    }

    /// Selectable labels for `set`: `"Overall"` followed by the sorted
    /// participant names.
    pub fn choices(set: &RecordSet) -> Vec<String> {
        std::iter::once(OVERALL.to_string())
            .chain(set.participants().into_iter().map(str::to_string))
            .collect()
    }
}

impl std::fmt::Display for SenderFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for SenderFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err("Sender name must not be empty".to_string()),
            OVERALL => Ok(SenderFilter::Overall),
            name => Ok(SenderFilter::participant(name)),
        }
    }
}

/// A borrowed, ordered subset of a record set.
///
/// Selections are cheap to build and may be empty; every metric accepts an
/// empty selection and returns zero counts or empty tables.
#[derive(Debug, Clone, Default)]
pub struct Selection<'a> {
    records: Vec<&'a MessageRecord>,
}

impl<'a> Selection<'a> {
    /// Collects `records` into a selection, keeping their order.
    pub fn new(records: impl IntoIterator<Item = &'a MessageRecord>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a MessageRecord> + '_ {
        self.records.iter().copied()
    }

    /// Records written by participants, excluding media placeholders.
    ///
    /// This is the corpus the word-based metrics read.
    pub fn text_messages(&self) -> impl Iterator<Item = &'a MessageRecord> + '_ {
        self.iter().filter(|r| !r.is_notification() && !r.is_media())
    }
}

/// Applies `filter` to `set`. Alias for [`RecordSet::select`].
pub fn apply_filter<'a>(set: &'a RecordSet, filter: &SenderFilter) -> Selection<'a> {
    set.select(filter)
}

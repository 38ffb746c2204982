//! The ordered, immutable collection of records parsed from one export.

use serde::Serialize;

use crate::error::{ChatlensError, Result};
use crate::metrics::filter::{Selection, SenderFilter};
use crate::record::MessageRecord;

/// All records from one chat export, in export order.
///
/// A `RecordSet` is never empty: construction fails with
/// [`ChatlensError::InvalidFormat`] when there is nothing to analyze, so
/// holding one means the export passed validation. Metrics read it through
/// [`Selection`]s and never modify it.
///
/// ```
/// use chatlens::metrics::SenderFilter;
///
/// let set = chatlens::parse(
///     "12/05/23, 09:00 - Alice: Hi\n12/05/23, 09:01 - Bob: Hey\n12/05/23, 09:02 - Bob left",
/// )?;
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.participants(), vec!["Alice", "Bob"]);
/// assert_eq!(set.select(&SenderFilter::participant("Bob")).len(), 1);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<MessageRecord>,
}

impl RecordSet {
    /// Wraps parsed records, rejecting an empty export.
    pub fn new(records: Vec<MessageRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(ChatlensError::not_an_export(
                "the export contains no messages",
            ));
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false` for a constructed set; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageRecord> {
        self.records.iter()
    }

    /// Distinct participant names, sorted, without the notification sentinel.
    pub fn participants(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .records
            .iter()
            .filter_map(|r| r.sender().name())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Returns `true` if `name` wrote at least one message.
    pub fn has_participant(&self, name: &str) -> bool {
        self.records
            .iter()
            .any(|r| r.sender().name() == Some(name))
    }

    /// Every record, unfiltered.
    pub fn all(&self) -> Selection<'_> {
        Selection::new(self.records.iter())
    }

    /// Records matching `filter`. Unknown participants give an empty selection.
    pub fn select(&self, filter: &SenderFilter) -> Selection<'_> {
        Selection::new(self.records.iter().filter(|r| filter.matches(r)))
    }

    /// Like [`select`](Self::select), but rejects participants who never wrote.
    pub fn select_checked(&self, filter: &SenderFilter) -> Result<Selection<'_>> {
        if let SenderFilter::Participant(name) = filter {
            if !self.has_participant(name) {
                return Err(ChatlensError::unknown_sender(name.clone()));
            }
        }
        Ok(self.select(filter))
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Sender;
    use chrono::NaiveDate;

    fn record(sender: Sender, body: &str) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        MessageRecord::new(ts, sender, body)
    }

    fn sample() -> RecordSet {
        RecordSet::new(vec![
            record(Sender::participant("Zoe"), "a"),
            record(Sender::Notification, "Zoe added Adam"),
            record(Sender::participant("Adam"), "b"),
            record(Sender::participant("Zoe"), "c"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_record_set_is_rejected() {
        let err = RecordSet::new(vec![]).unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_participants_sorted_without_notifications() {
        assert_eq!(sample().participants(), vec!["Adam", "Zoe"]);
    }

    #[test]
    fn test_select_overall_keeps_everything() {
        let set = sample();
        assert_eq!(set.select(&SenderFilter::Overall).len(), 4);
        assert_eq!(set.all().len(), 4);
    }

    #[test]
    fn test_select_participant() {
        let set = sample();
        let zoe = set.select(&SenderFilter::participant("Zoe"));
        assert_eq!(zoe.len(), 2);
        assert!(zoe.iter().all(|r| r.sender().as_str() == "Zoe"));
    }

    #[test]
    fn test_select_unknown_participant() {
        let set = sample();
        assert!(set.select(&SenderFilter::participant("Nobody")).is_empty());

        let err = set
            .select_checked(&SenderFilter::participant("Nobody"))
            .unwrap_err();
        assert!(err.to_string().contains("Nobody"));
    }

    #[test]
    fn test_notification_sentinel_is_not_selectable() {
        let set = sample();
        let picked = set.select(&SenderFilter::participant("group_notification"));
        assert!(picked.is_empty());
    }

    #[test]
    fn test_iteration_preserves_order() {
        let set = sample();
        let bodies: Vec<&str> = set.iter().map(|r| r.body()).collect();
        assert_eq!(bodies, vec!["a", "Zoe added Adam", "b", "c"]);
    }
}

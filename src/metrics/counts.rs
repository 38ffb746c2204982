//! Headline numbers and participation shares.

use serde::Serialize;

use super::filter::Selection;
use super::tally::{Tally, ranked};
use super::words::count_urls;
use crate::record_set::RecordSet;

/// The four headline statistics of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BasicCounts {
    /// Number of records, system lines included.
    pub messages: usize,
    /// Whitespace-separated tokens across every body.
    pub words: usize,
    /// Records whose body is exactly the media placeholder.
    pub media: usize,
    /// URLs found across every body.
    pub links: usize,
}

/// Computes message, word, media and link counts.
///
/// Nothing is excluded: under the Overall selection system lines contribute
/// their words too.
///
/// ```
/// use chatlens::metrics::basic_counts;
///
/// let set = chatlens::parse(
///     "12/05/23, 09:00 - Alice: see https://example.com\n12/05/23, 09:05 - Bob: <Media omitted>",
/// )?;
/// let counts = basic_counts(&set.all());
/// assert_eq!((counts.messages, counts.words, counts.media, counts.links), (2, 4, 1, 1));
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn basic_counts(selection: &Selection<'_>) -> BasicCounts {
    selection
        .iter()
        .fold(BasicCounts::default(), |mut counts, record| {
            counts.messages += 1;
            counts.words += record.word_count();
            counts.media += usize::from(record.is_media());
            counts.links += count_urls(record.body());
            counts
        })
}

/// A sender's share of all records, in percent rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenderShare {
    pub name: String,
    pub percent: f64,
}

/// Most active senders plus every sender's share of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopSenders {
    /// The busiest senders, most messages first.
    pub top: Vec<Tally>,
    /// Every sender (the notification sentinel included), same order.
    pub shares: Vec<SenderShare>,
}

/// Ranks senders of the whole record set by message count.
///
/// Percentages use the total record count, system lines included, as the
/// denominator, so the shares column sums to 100 up to rounding.
pub fn top_senders(set: &RecordSet, limit: usize) -> TopSenders {
    let counts = ranked(set.iter().map(|r| r.sender().as_str()));
    let total = set.len();

    let shares = counts
        .iter()
        .map(|tally| SenderShare {
            name: tally.label.clone(),
            percent: round2(tally.count as f64 / total as f64 * 100.0),
        })
        .collect();

    TopSenders {
        top: counts.into_iter().take(limit).collect(),
        shares,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//! Every metric for one selection, gathered into a single serializable value.

use serde::Serialize;
use tracing::debug;

use super::counts::{BasicCounts, TopSenders, basic_counts, top_senders};
use super::emoji::emoji_counts;
use super::filter::SenderFilter;
use super::tally::Tally;
use super::timeline::{
    ActivityHeatmap, DailyPoint, MonthlyPoint, activity_heatmap, daily_timeline, month_activity,
    monthly_timeline, weekday_activity,
};
use super::words::{StopWords, top_words, word_cloud_input};
use crate::config::MetricsConfig;
use crate::record_set::RecordSet;

/// The full analysis of one selection.
///
/// `top_senders` is only present for the Overall selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub selected: String,
    pub basic_counts: BasicCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_senders: Option<TopSenders>,
    pub word_cloud_input: String,
    pub top_words: Vec<Tally>,
    pub emoji_counts: Vec<Tally>,
    pub monthly_timeline: Vec<MonthlyPoint>,
    pub daily_timeline: Vec<DailyPoint>,
    pub weekday_activity: Vec<Tally>,
    pub month_activity: Vec<Tally>,
    pub activity_heatmap: ActivityHeatmap,
}

/// Computes every metric for the records of `set` that pass `filter`.
///
/// ```
/// use chatlens::config::MetricsConfig;
/// use chatlens::metrics::{SenderFilter, StopWords, analyze};
///
/// let set = chatlens::parse("12/05/23, 09:00 - Alice: Hello there\n12/05/23, 09:05 - Bob: 🎉")?;
/// let report = analyze(&set, &SenderFilter::Overall, &StopWords::empty(), &MetricsConfig::default());
///
/// assert_eq!(report.basic_counts.messages, 2);
/// assert!(report.top_senders.is_some());
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn analyze(
    set: &RecordSet,
    filter: &SenderFilter,
    stop_words: &StopWords,
    config: &MetricsConfig,
) -> AnalysisReport {
    let selection = set.select(filter);
    let matching = config.stop_word_matching;
    debug!(
        selected = %filter,
        records = selection.len(),
        %matching,
        "Computing metrics"
    );

    AnalysisReport {
        selected: filter.label().to_string(),
        basic_counts: basic_counts(&selection),
        top_senders: filter
            .is_overall()
            .then(|| top_senders(set, config.top_senders)),
        word_cloud_input: word_cloud_input(&selection, stop_words, matching),
        top_words: top_words(&selection, stop_words, matching, config.top_words),
        emoji_counts: emoji_counts(&selection),
        monthly_timeline: monthly_timeline(&selection),
        daily_timeline: daily_timeline(&selection),
        weekday_activity: weekday_activity(&selection),
        month_activity: month_activity(&selection),
        activity_heatmap: activity_heatmap(&selection),
    }
}

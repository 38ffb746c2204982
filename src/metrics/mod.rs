//! Statistics over a parsed export.
//!
//! Every metric reads a [`Selection`], the records that pass a
//! [`SenderFilter`], and returns a plain value. Metrics never fail: an empty
//! selection yields zero counts and empty tables.
//!
//! | Function | Counts system lines | Counts media |
//! |----------|---------------------|--------------|
//! | [`basic_counts`] | yes | yes |
//! | [`top_senders`] | yes | yes |
//! | [`word_cloud_input`], [`top_words`] | no | no |
//! | [`emoji_counts`] | yes | yes |
//! | timelines, [`activity_heatmap`] | yes | yes |
//!
//! # Example
//!
//! ```
//! use chatlens::config::StopWordMatching;
//! use chatlens::metrics::{SenderFilter, StopWords, basic_counts, top_words};
//!
//! let set = chatlens::parse("1/2/23, 10:00 - Alice: hi hi there\n1/2/23, 10:05 - Bob: hi")?;
//! let alice = set.select(&SenderFilter::participant("Alice"));
//!
//! assert_eq!(basic_counts(&alice).words, 3);
//! let words = top_words(&alice, &StopWords::empty(), StopWordMatching::Exact, 20);
//! assert_eq!(words[0].label, "hi");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

pub mod counts;
pub mod emoji;
pub mod filter;
pub mod report;
pub mod tally;
pub mod timeline;
pub mod words;

pub use counts::{BasicCounts, SenderShare, TopSenders, basic_counts, top_senders};
pub use emoji::{emoji_counts, is_emoji};
pub use filter::{OVERALL, Selection, SenderFilter, apply_filter};
pub use report::{AnalysisReport, analyze};
pub use tally::{Tally, ranked};
pub use timeline::{
    ActivityHeatmap, DailyPoint, MonthlyPoint, activity_heatmap, daily_timeline, month_activity,
    monthly_timeline, weekday_activity,
};
pub use words::{BUNDLED_STOP_WORDS, StopWords, count_urls, find_urls, top_words, word_cloud_input};

//! Activity over time: timelines, busiest days and months, and the
//! weekday-by-hour heatmap.
//!
//! All functions count every record in the selection, system lines
//! included under Overall.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::filter::Selection;
use super::tally::{Tally, ranked};
use crate::record::{MONTH_NAMES, WEEKDAY_NAMES, hour_band};

/// Message count for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month_num: u32,
    pub month_name: String,
    pub count: usize,
    /// `"{month_name}-{year}"`, e.g. `"May-2023"`.
    pub label: String,
}

/// Message count for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub count: usize,
}

/// Per-month counts in chronological order. Months without messages are
/// absent.
///
/// ```
/// use chatlens::metrics::monthly_timeline;
///
/// let set = chatlens::parse("12/05/23, 09:00 - A: x\n2/06/23, 10:00 - B: y\n9/06/23, 11:00 - A: z")?;
/// let timeline = monthly_timeline(&set.all());
/// let labels: Vec<&str> = timeline.iter().map(|p| p.label.as_str()).collect();
/// assert_eq!(labels, vec!["May-2023", "June-2023"]);
/// assert_eq!(timeline[1].count, 2);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn monthly_timeline(selection: &Selection<'_>) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in selection.iter() {
        *months.entry((record.year(), record.month_num())).or_default() += 1;
    }

    months
        .into_iter()
        .map(|((year, month_num), count)| {
            let month_name = MONTH_NAMES[(month_num - 1) as usize].to_string();
            MonthlyPoint {
                label: format!("{}-{}", month_name, year),
                year,
                month_num,
                month_name,
                count,
            }
        })
        .collect()
}

/// Per-day counts in chronological order. Days without messages are absent.
pub fn daily_timeline(selection: &Selection<'_>) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in selection.iter() {
        *days.entry(record.date()).or_default() += 1;
    }

    days.into_iter()
        .map(|(date, count)| DailyPoint { date, count })
        .collect()
}

/// Messages per weekday name, busiest first.
pub fn weekday_activity(selection: &Selection<'_>) -> Vec<Tally> {
    ranked(selection.iter().map(|r| r.day_name()))
}

/// Messages per month name (all years together), busiest first.
pub fn month_activity(selection: &Selection<'_>) -> Vec<Tally> {
    ranked(selection.iter().map(|r| r.month_name()))
}

/// Weekday-by-hour-band message counts.
///
/// Rows are the weekdays that occur, Monday first; columns are the hour
/// bands that occur, earliest first. Cells without messages hold 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivityHeatmap {
    pub days: Vec<String>,
    pub bands: Vec<String>,
    /// `counts[row][column]`, indexed like `days` and `bands`.
    pub counts: Vec<Vec<usize>>,
}

impl ActivityHeatmap {
    /// Count for one cell, `None` if the day or band is not in the table.
    pub fn get(&self, day: &str, band: &str) -> Option<usize> {
        let row = self.days.iter().position(|d| d == day)?;
        let column = self.bands.iter().position(|b| b == band)?;
        Some(self.counts[row][column])
    }

    /// Sum of every cell.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Builds the weekday-by-hour-band heatmap.
///
/// ```
/// use chatlens::metrics::activity_heatmap;
///
/// // 12 May 2023 was a Friday
/// let set = chatlens::parse("12/05/23, 09:00 - A: x\n12/05/23, 09:30 - B: y\n13/05/23, 23:10 - A: z")?;
/// let heatmap = activity_heatmap(&set.all());
/// assert_eq!(heatmap.days, vec!["Friday", "Saturday"]);
/// assert_eq!(heatmap.bands, vec!["9-10", "23-00"]);
/// assert_eq!(heatmap.get("Friday", "9-10"), Some(2));
/// assert_eq!(heatmap.get("Friday", "23-00"), Some(0));
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn activity_heatmap(selection: &Selection<'_>) -> ActivityHeatmap {
    let mut grid = [[0usize; 24]; 7];
    for record in selection.iter() {
        let day = record.timestamp().weekday().num_days_from_monday() as usize;
        grid[day][record.hour() as usize] += 1;
    }

    let rows: Vec<usize> = (0..7).filter(|&d| grid[d].iter().any(|&c| c > 0)).collect();
    let columns: Vec<usize> = (0..24)
        .filter(|&h| grid.iter().any(|row| row[h] > 0))
        .collect();

    ActivityHeatmap {
        days: rows.iter().map(|&d| WEEKDAY_NAMES[d].to_string()).collect(),
        bands: columns.iter().map(|&h| hour_band(h as u32)).collect(),
        counts: rows
            .iter()
            .map(|&d| columns.iter().map(|&h| grid[d][h]).collect())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::SenderFilter;
    use crate::parser::parse;

    // 1/1/24 was a Monday
    const CHAT: &str = "1/1/24, 00:15 - Alice: a\n\
                        1/1/24, 00:45 - Bob: b\n\
                        3/1/24, 23:59 - Alice: c\n\
                        7/2/24, 12:00 - Alice left\n\
                        7/2/23, 12:00 - Bob: d";

    #[test]
    fn test_monthly_timeline_is_chronological() {
        let set = parse(CHAT).unwrap();
        let timeline = monthly_timeline(&set.all());
        let labels: Vec<&str> = timeline.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["February-2023", "January-2024", "February-2024"]);
        assert_eq!(timeline[1].count, 3);
        assert_eq!(timeline[1].month_num, 1);
        assert_eq!(timeline[2].year, 2024);
    }

    #[test]
    fn test_daily_timeline() {
        let set = parse(CHAT).unwrap();
        let daily = daily_timeline(&set.all());
        assert_eq!(daily.len(), 4);
        assert_eq!(daily[0].date, NaiveDate::from_ymd_opt(2023, 2, 7).unwrap());
        assert_eq!(daily[1].count, 2);
    }

    #[test]
    fn test_weekday_and_month_activity() {
        let set = parse(CHAT).unwrap();
        let weekdays = weekday_activity(&set.all());
        assert_eq!(weekdays[0], Tally::new("Monday", 2));

        let months = month_activity(&set.all());
        assert_eq!(months[0], Tally::new("January", 3));
        assert_eq!(months[1], Tally::new("February", 2));
    }

    #[test]
    fn test_heatmap_layout() {
        let set = parse(CHAT).unwrap();
        let heatmap = activity_heatmap(&set.all());

        // 7 Feb 2024 is a Wednesday, 7 Feb 2023 a Tuesday
        assert_eq!(heatmap.days, vec!["Monday", "Tuesday", "Wednesday"]);
        assert_eq!(heatmap.bands, vec!["0-1", "12-13", "23-00"]);
        assert_eq!(heatmap.get("Monday", "0-1"), Some(2));
        assert_eq!(heatmap.get("Wednesday", "23-00"), Some(1));
        assert_eq!(heatmap.get("Wednesday", "12-13"), Some(1));
        assert_eq!(heatmap.get("Tuesday", "0-1"), Some(0));
        assert_eq!(heatmap.get("Sunday", "0-1"), None);
        assert_eq!(heatmap.total(), set.len());
    }

    #[test]
    fn test_heatmap_for_participant() {
        let set = parse(CHAT).unwrap();
        let heatmap = activity_heatmap(&set.select(&SenderFilter::participant("Bob")));
        assert_eq!(heatmap.total(), 2);
        assert_eq!(heatmap.days, vec!["Monday", "Tuesday"]);
    }

    #[test]
    fn test_empty_selection() {
        let empty = Selection::default();
        assert!(monthly_timeline(&empty).is_empty());
        assert!(daily_timeline(&empty).is_empty());
        assert!(weekday_activity(&empty).is_empty());
        assert!(activity_heatmap(&empty).is_empty());
        assert_eq!(activity_heatmap(&empty).total(), 0);
    }
}

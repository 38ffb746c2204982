//! Property-based tests for chatlens.
//!
//! These tests generate random exports to find edge cases.

use proptest::prelude::*;

use chatlens::parsing::split_sender;
use chatlens::prelude::*;
use chatlens::record::{MEDIA_OMITTED, hour_band};

/// One generated message: (day, month, hour, minute, sender, body).
/// `None` as sender writes a system line.
type Line = (u32, u32, u32, u32, Option<&'static str>, &'static str);

fn arb_sender() -> impl Strategy<Value = Option<&'static str>> {
    // Fast: select from predefined senders
    prop::sample::select(vec![
        Some("Alice"),
        Some("Bob"),
        Some("Riya Sharma"),
        Some("Иван"),
        Some("🔥FireUser🔥"),
        Some("+91 98765 43210"),
        None,
    ])
}

fn arb_body() -> impl Strategy<Value = &'static str> {
    // Fast: select from predefined bodies
    prop::sample::select(vec![
        "Hello",
        "kya scene hai",
        "note: meet at 10:30",
        "two\nlines",
        "blank\n\nin between",
        MEDIA_OMITTED,
        "see https://example.com/x and www.example.org",
        "😂😂 🔥",
        "Привет мир",
        "",
    ])
}

fn arb_line() -> impl Strategy<Value = Line> {
    (1u32..=28, 1u32..=12, 0u32..24, 0u32..60, arb_sender(), arb_body())
}

/// Lines sorted by time, as an export would list them.
fn arb_lines(max_len: usize) -> impl Strategy<Value = Vec<Line>> {
    prop::collection::vec(arb_line(), 1..max_len).prop_map(|mut lines| {
        lines.sort_by_key(|&(day, month, hour, minute, _, _)| (month, day, hour, minute));
        lines
    })
}

fn message_text(sender: Option<&str>, body: &str) -> String {
    match sender {
        Some(name) => format!("{}: {}", name, body),
        // System lines never contain ": "
        None => "Alice added Bob".to_string(),
    }
}

fn render_24h(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|&(day, month, hour, minute, sender, body)| {
            format!(
                "{}/{:02}/24, {:02}:{:02} - {}",
                day,
                month,
                hour,
                minute,
                message_text(sender, body)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_12h(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|&(day, month, hour, minute, sender, body)| {
            let meridiem = if hour < 12 { "AM" } else { "PM" };
            let twelve = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!(
                "{}/{}/24, {}:{:02} {} - {}",
                day,
                month,
                twelve,
                minute,
                meridiem,
                message_text(sender, body)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSING PROPERTIES
    // ============================================

    /// A 12-hour export parses to the same records as its 24-hour twin
    #[test]
    fn twelve_hour_export_matches_twenty_four_hour(lines in arb_lines(20)) {
        let from_24 = parse(&render_24h(&lines)).unwrap();
        let from_12 = parse(&render_12h(&lines)).unwrap();
        prop_assert_eq!(from_24, from_12);
    }

    /// One record per header, in export order
    #[test]
    fn records_follow_export_order(lines in arb_lines(20)) {
        let set = parse(&render_24h(&lines)).unwrap();
        prop_assert_eq!(set.len(), lines.len());

        for window in set.records().windows(2) {
            prop_assert!(window[0].timestamp() <= window[1].timestamp());
        }
        for (record, &(_, _, hour, minute, sender, _)) in set.iter().zip(&lines) {
            prop_assert_eq!(record.hour(), hour);
            prop_assert_eq!(record.minute(), minute);
            prop_assert_eq!(record.sender().name(), sender);
        }
    }

    /// Every hour falls in exactly one band and the band starts at that hour
    #[test]
    fn hour_band_partitions_the_day(hour in 0u32..24) {
        let band = hour_band(hour);
        let (start, end) = band.split_once('-').unwrap();
        prop_assert_eq!(start.parse::<u32>().unwrap(), hour);

        let others = (0u32..24).filter(|&h| hour_band(h) == band).count();
        prop_assert_eq!(others, 1);

        if hour == 23 {
            prop_assert_eq!(end, "00");
        } else {
            prop_assert_eq!(end.parse::<u32>().unwrap(), hour + 1);
        }
    }

    /// Sender detection never loses text: name and body rebuild the chunk
    #[test]
    fn sender_split_is_total(sender in arb_sender(), body in arb_body()) {
        let chunk = message_text(sender, body);
        let (detected, rest) = split_sender(&chunk);

        match detected.name() {
            Some(name) => {
                prop_assert!(chunk.starts_with(name));
                prop_assert!(chunk.ends_with(rest));
                prop_assert_eq!(Some(name), sender);
                prop_assert_eq!(rest, body);
            }
            None => prop_assert_eq!(rest, chunk.as_str()),
        }
    }

    // ============================================
    // METRICS PROPERTIES
    // ============================================

    /// Basic counts agree with the records they summarize
    #[test]
    fn basic_counts_are_consistent(lines in arb_lines(30)) {
        let set = parse(&render_24h(&lines)).unwrap();
        let all = set.all();
        let counts = basic_counts(&all);

        prop_assert_eq!(counts.messages, set.len());
        prop_assert!(counts.media <= counts.messages);
        prop_assert_eq!(counts.words, set.iter().map(|r| r.word_count()).sum::<usize>());

        let per_participant: usize = set
            .participants()
            .iter()
            .map(|name| basic_counts(&set.select(&SenderFilter::participant(*name))).messages)
            .sum();
        let notifications = set.iter().filter(|r| r.is_notification()).count();
        prop_assert_eq!(per_participant + notifications, counts.messages);
    }

    /// Sender shares add up to 100 percent
    #[test]
    fn sender_shares_sum_to_one_hundred(lines in arb_lines(30)) {
        let set = parse(&render_24h(&lines)).unwrap();
        let shares = top_senders(&set, 5).shares;
        let total: f64 = shares.iter().map(|s| s.percent).sum();
        prop_assert!((total - 100.0).abs() <= 0.05, "shares sum to {}", total);
    }

    /// The heatmap covers every selected record exactly once
    #[test]
    fn heatmap_total_matches_selection(lines in arb_lines(30), sender in arb_sender()) {
        let set = parse(&render_24h(&lines)).unwrap();
        let filter = match sender {
            Some(name) => SenderFilter::participant(name),
            None => SenderFilter::Overall,
        };
        let selection = set.select(&filter);
        let heatmap = activity_heatmap(&selection);

        prop_assert_eq!(heatmap.total(), selection.len());
        prop_assert!(heatmap.days.len() <= 7);
        prop_assert!(heatmap.bands.len() <= 24);
        prop_assert_eq!(heatmap.counts.len(), heatmap.days.len());
    }

    /// Word metrics never see media placeholders or system lines
    #[test]
    fn top_words_skip_media_and_notifications(lines in arb_lines(30)) {
        let set = parse(&render_24h(&lines)).unwrap();
        let words = top_words(&set.all(), &StopWords::empty(), StopWordMatching::Exact, 50);

        for tally in &words {
            prop_assert_ne!(tally.label.as_str(), "<media");
            prop_assert_ne!(tally.label.as_str(), "added");
        }
    }
}

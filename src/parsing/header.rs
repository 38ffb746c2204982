//! Message header scanning for WhatsApp TXT exports.
//!
//! Every message starts at the beginning of a line with a header:
//!
//! ```text
//! 12/05/23, 09:00 - Alice: Hello there
//! ^^^^^^^^^^^^^^^^^^ canonical header
//! ```
//!
//! Exports made on phones set to a 12-hour clock write `12/05/23, 9:00 AM - `
//! instead. Parsing runs in two passes:
//!
//! 1. [`normalize_headers`] rewrites every 12-hour header into the canonical
//!    24-hour form, leaving headers it cannot interpret untouched.
//! 2. [`split_messages`] cuts the normalized text at each canonical header.
//!
//! # Separator semantics
//!
//! A canonical header is `D/M/Y, H:MM - ` where `D` and `M` are 1-2 digits,
//! `Y` is 2-4 digits and the separators are single non-newline whitespace
//! characters. It is recognized only at the start of a line (optionally
//! preceded by byte-order or directional marks). A date appearing in the
//! middle of a line is message text, not a separator. Text before the first
//! header is discarded.

use std::borrow::Cow;

use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref TWELVE_HOUR_HEADER: Regex = Regex::new(
        r"(?m)^([\u{FEFF}\u{200E}\u{200F}]*)(\d{1,2}/\d{1,2}/\d{2,4}),[^\S\r\n]*(\d{1,2}:\d{2})[^\S\r\n]*([AaPp][Mm])[^\S\r\n]*-[^\S\r\n]*"
    )
    .unwrap();
    static ref CANONICAL_HEADER: Regex = Regex::new(
        r"(?m)^[\u{FEFF}\u{200E}\u{200F}]*(\d{1,2}/\d{1,2}/\d{2,4}),[^\S\r\n](\d{1,2}:\d{2})[^\S\r\n]-[^\S\r\n]"
    )
    .unwrap();
}

/// Date interpretations tried for 12-hour headers, two-digit year first.
const TWELVE_HOUR_FORMATS: [&str; 2] = ["%d/%m/%y %I:%M %p", "%d/%m/%Y %I:%M %p"];

/// Layout of a rewritten header.
const CANONICAL_HEADER_LAYOUT: &str = "%d/%m/%y, %H:%M - ";

/// Layout the date and time of a canonical header are parsed with.
const CANONICAL_TIMESTAMP_FORMAT: &str = "%d/%m/%y, %H:%M";

/// Result of the header normalization pass.
#[derive(Debug, Clone)]
pub struct Normalized<'a> {
    /// The text with every convertible 12-hour header rewritten.
    pub text: Cow<'a, str>,
    /// Number of 12-hour headers rewritten.
    pub converted: usize,
    /// 12-hour headers left as they were, in text order.
    pub unconverted: Vec<Unconverted>,
}

/// A 12-hour header neither date interpretation could read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unconverted {
    /// 1-based line number of the header.
    pub line: usize,
    /// The header text, separator included.
    pub header: String,
}

/// Rewrites a single 12-hour header as a canonical one.
///
/// Returns `None` when neither the two-digit nor the four-digit year
/// interpretation yields a valid date and time.
///
/// ```
/// use chatlens::parsing::header::convert_twelve_hour;
///
/// assert_eq!(
///     convert_twelve_hour("5/3/23", "2:15", "PM").as_deref(),
///     Some("05/03/23, 14:15 - ")
/// );
/// assert_eq!(
///     convert_twelve_hour("5/3/2023", "12:05", "am").as_deref(),
///     Some("05/03/23, 00:05 - ")
/// );
/// assert_eq!(convert_twelve_hour("31/02/23", "1:00", "PM"), None);
/// ```
pub fn convert_twelve_hour(date: &str, time: &str, meridiem: &str) -> Option<String> {
    let raw = format!("{} {} {}", date, time, meridiem.to_ascii_uppercase());

    TWELVE_HOUR_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&raw, format).ok())
        .map(|dt| dt.format(CANONICAL_HEADER_LAYOUT).to_string())
}

/// First pass: rewrites 12-hour headers into canonical 24-hour headers.
///
/// Headers that cannot be interpreted are kept byte-for-byte, so the second
/// pass sees them exactly as exported. Text without any 12-hour header is
/// returned borrowed.
pub fn normalize_headers(text: &str) -> Normalized<'_> {
    let mut converted = 0;
    let mut unconverted = Vec::new();
    let mut line = 1;
    let mut counted_to = 0;

    let normalized = TWELVE_HOUR_HEADER.replace_all(text, |caps: &Captures<'_>| {
        match convert_twelve_hour(&caps[2], &caps[3], &caps[4]) {
            Some(header) => {
                converted += 1;
                format!("{}{}", &caps[1], header)
            }
            None => {
                // Matches arrive in text order.
                let start = caps.get(0).map_or(counted_to, |m| m.start());
                line += text[counted_to..start].matches('\n').count();
                counted_to = start;
                unconverted.push(Unconverted {
                    line,
                    header: caps[0].to_string(),
                });
                caps[0].to_string()
            }
        }
    });

    Normalized {
        text: normalized,
        converted,
        unconverted,
    }
}

/// One message as cut out of the normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// 1-based line number of the header.
    pub line: usize,
    /// The full header, separator included.
    pub header: &'a str,
    /// Date part of the header (`12/05/23`).
    pub date: &'a str,
    /// Time part of the header (`09:00`).
    pub time: &'a str,
    /// Everything up to the next header, line breaks included.
    pub body: &'a str,
}

/// Second pass: splits normalized text into one chunk per header.
///
/// ```
/// use chatlens::parsing::header::split_messages;
///
/// let text = "preamble\n12/05/23, 09:00 - Alice: Hi\nsecond line\n12/05/23, 09:05 - Bob: Yo";
/// let chunks = split_messages(text);
///
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].header, "12/05/23, 09:00 - ");
/// assert_eq!(chunks[0].body, "Alice: Hi\nsecond line\n");
/// assert_eq!(chunks[1].line, 4);
/// assert_eq!(chunks[1].body, "Bob: Yo");
/// ```
pub fn split_messages(text: &str) -> Vec<Chunk<'_>> {
    let mut chunks = Vec::new();
    let mut line = 1;
    let mut counted_to = 0;

    let matches: Vec<Captures<'_>> = CANONICAL_HEADER.captures_iter(text).collect();

    for (i, caps) in matches.iter().enumerate() {
        let whole = caps.get(0).map_or(0..0, |m| m.range());
        let body_end = matches
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |m| m.start());

        line += text[counted_to..whole.start].matches('\n').count();
        counted_to = whole.start;

        chunks.push(Chunk {
            line,
            header: &text[whole.clone()],
            date: caps.get(1).map_or("", |m| m.as_str()),
            time: caps.get(2).map_or("", |m| m.as_str()),
            body: &text[whole.end..body_end],
        });
    }

    chunks
}

/// Parses the date and time of a canonical header.
///
/// Only two-digit years are accepted: this is the layout the first pass
/// produces, so anything else means the header was never normalized.
pub fn parse_canonical_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{date}, {time}"), CANONICAL_TIMESTAMP_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_normalize_round_trip() {
        let twelve = normalize_headers("5/3/23, 2:15 PM - Alice: hi");
        assert_eq!(twelve.text, "05/03/23, 14:15 - Alice: hi");
        assert_eq!(twelve.converted, 1);

        let chunks = split_messages(&twelve.text);
        let from_twelve = parse_canonical_timestamp(chunks[0].date, chunks[0].time);
        let direct = parse_canonical_timestamp("05/03/23", "14:15");
        assert!(direct.is_some());
        assert_eq!(from_twelve, direct);
    }

    #[test]
    fn test_normalize_four_digit_year() {
        let normalized = normalize_headers("15/01/2024, 10:30 AM - Bob: morning");
        assert_eq!(normalized.text, "15/01/24, 10:30 - Bob: morning");
    }

    #[test]
    fn test_normalize_midnight_and_noon() {
        assert_eq!(
            convert_twelve_hour("1/1/24", "12:00", "AM").as_deref(),
            Some("01/01/24, 00:00 - ")
        );
        assert_eq!(
            convert_twelve_hour("1/1/24", "12:30", "pm").as_deref(),
            Some("01/01/24, 12:30 - ")
        );
    }

    #[test]
    fn test_normalize_leaves_unparsable_header_untouched() {
        let text = "12/05/23, 09:00 - Bob: x\n45/13/23, 2:15 PM - Alice: hi";
        let normalized = normalize_headers(text);
        assert_eq!(normalized.text, text);
        assert_eq!(normalized.converted, 0);
        assert_eq!(normalized.unconverted.len(), 1);
        assert_eq!(normalized.unconverted[0].line, 2);
        assert_eq!(normalized.unconverted[0].header, "45/13/23, 2:15 PM - ");
    }

    #[test]
    fn test_normalize_reports_every_unconverted_line() {
        // Month-first exports: days above 12 cannot be read day-first
        let mut text = String::new();
        for i in 0..3000 {
            text.push_str(&format!("12/{}/23, 9:00 PM - Alice: msg {}\nsecond line\n", 13 + i % 15, i));
        }
        let normalized = normalize_headers(&text);

        assert_eq!(normalized.converted, 0);
        assert_eq!(normalized.unconverted.len(), 3000);
        assert_eq!(normalized.text, text.as_str());
        let lines: Vec<usize> = normalized.unconverted.iter().map(|u| u.line).collect();
        let expected: Vec<usize> = (0..3000).map(|i| 2 * i + 1).collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_normalize_without_twelve_hour_headers_borrows() {
        let text = "12/05/23, 09:00 - Alice: Hello";
        let normalized = normalize_headers(text);
        assert!(matches!(normalized.text, Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalize_keeps_line_structure() {
        let text = "1/2/23, 9:00 AM - \n1/2/23, 9:01 AM - Bob: x";
        let normalized = normalize_headers(text);
        assert_eq!(normalized.text, "01/02/23, 09:00 - \n01/02/23, 09:01 - Bob: x");
        assert_eq!(split_messages(&normalized.text).len(), 2);
    }

    #[test]
    fn test_narrow_no_break_space_before_meridiem() {
        let normalized = normalize_headers("1/2/23, 9:00\u{202F}PM - Bob: x");
        assert_eq!(normalized.text, "01/02/23, 21:00 - Bob: x");
    }

    #[test]
    fn test_split_ignores_mid_line_dates() {
        let text = "12/05/23, 09:00 - Alice: see you 13/05/23, 10:00 - ok";
        let chunks = split_messages(text);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].body, "Alice: see you 13/05/23, 10:00 - ok");
    }

    #[test]
    fn test_split_no_headers() {
        assert!(split_messages("just some text\nwithout headers").is_empty());
        assert!(split_messages("").is_empty());
    }

    #[test]
    fn test_split_with_byte_order_mark() {
        let chunks = split_messages("\u{FEFF}12/05/23, 09:00 - Alice: Hi");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].date, "12/05/23");
    }

    #[test]
    fn test_split_line_numbers_with_multiline_bodies() {
        let text = "12/05/23, 09:00 - A: 1\n2\n3\n12/05/23, 09:01 - B: x\n12/05/23, 09:02 - C: y";
        let lines: Vec<usize> = split_messages(text).iter().map(|c| c.line).collect();
        assert_eq!(lines, vec![1, 4, 5]);
    }

    #[test]
    fn test_parse_canonical_timestamp() {
        let ts = parse_canonical_timestamp("12/05/23", "09:00").unwrap();
        let expected = NaiveDate::from_ymd_opt(2023, 5, 12)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(ts, expected);
    }

    #[test]
    fn test_parse_canonical_rejects_four_digit_year() {
        assert!(parse_canonical_timestamp("12/05/2023", "09:00").is_none());
    }

    #[test]
    fn test_parse_canonical_rejects_invalid_date() {
        assert!(parse_canonical_timestamp("31/02/23", "09:00").is_none());
        assert!(parse_canonical_timestamp("12/05/23", "25:00").is_none());
    }
}

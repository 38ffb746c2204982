//! Word-frequency inputs, stop words and link detection.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::filter::Selection;
use super::tally::{Tally, ranked};
use crate::config::StopWordMatching;
use crate::error::Result;

/// The stop-word list shipped with the crate (Hinglish chat filler).
pub const BUNDLED_STOP_WORDS: &str = include_str!("../../data/stop_hinglish.txt");

lazy_static! {
    // Scheme or www. links, then bare domains on common TLDs.
    static ref URL_PATTERN: Regex = Regex::new(
        r#"(?i)\b(?:(?:https?|ftp)://|www\.)[^\s<>"]+|\b(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+(?:com|org|net|edu|gov|io|co|uk|in|me|info|app|dev|ly|gg|ai)\b(?:/[^\s<>"]*)?"#
    )
    .unwrap();
}

/// Finds the URLs in `text`.
///
/// Recognizes scheme links (`https://…`), `www.` links and bare domains such
/// as `example.com/page`. Trailing sentence punctuation is not part of a
/// link, and the domain part of an e-mail address is not a link.
///
/// ```
/// use chatlens::metrics::find_urls;
///
/// let urls: Vec<&str> = find_urls("see https://a.io/x or www.b.org, mail me@c.com").collect();
/// assert_eq!(urls, vec!["https://a.io/x", "www.b.org"]);
/// ```
pub fn find_urls(text: &str) -> impl Iterator<Item = &str> {
    URL_PATTERN
        .find_iter(text)
        .filter(|m| !text[..m.start()].ends_with('@'))
        .map(|m| m.as_str().trim_end_matches(['.', ',', ';', ':', '!', '?', ')']))
        .filter(|url| !url.is_empty())
}

/// Number of URLs in `text`.
pub fn count_urls(text: &str) -> usize {
    find_urls(text).count()
}

/// A set of words removed before word-frequency analysis.
///
/// Entries are whitespace-separated and case-insensitive. The raw text is
/// kept for [`StopWordMatching::Substring`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopWords {
    words: HashSet<String>,
    text: String,
}

impl StopWords {
    /// An empty list that removes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a list from whitespace-separated text.
    pub fn from_text(text: &str) -> Self {
        let text = text.to_lowercase();
        let words = text.split_whitespace().map(str::to_string).collect();
        Self { words, text }
    }

    /// Reads a list from a file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let list = Self::from_text(&text);
        debug!(path = %path.display(), words = list.len(), "Loaded stop words");
        Ok(list)
    }

    /// The bundled Hinglish list.
    pub fn bundled() -> Self {
        Self::from_text(BUNDLED_STOP_WORDS)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` if the lowercase `token` is a stop word under `matching`.
    pub fn contains(&self, token: &str, matching: StopWordMatching) -> bool {
        match matching {
            StopWordMatching::Exact => self.words.contains(token),
            StopWordMatching::Substring => !self.text.is_empty() && self.text.contains(token),
        }
    }
}

/// Lowercased tokens of the participant text in `selection`, stop words
/// removed, in message order.
fn kept_tokens<'s>(
    selection: &'s Selection<'_>,
    stop_words: &'s StopWords,
    matching: StopWordMatching,
) -> impl Iterator<Item = String> + 's {
    selection.text_messages().flat_map(move |record| {
        record
            .body()
            .to_lowercase()
            .split_whitespace()
            .filter(|token| !stop_words.contains(token, matching))
            .map(str::to_string)
            .collect::<Vec<_>>()
    })
}

/// Text for a word-cloud renderer: every kept token, space-joined.
///
/// System lines and media placeholders are left out.
pub fn word_cloud_input(
    selection: &Selection<'_>,
    stop_words: &StopWords,
    matching: StopWordMatching,
) -> String {
    kept_tokens(selection, stop_words, matching)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The `limit` most frequent kept tokens.
///
/// Tokens with equal counts keep first-occurrence order.
pub fn top_words(
    selection: &Selection<'_>,
    stop_words: &StopWords,
    matching: StopWordMatching,
    limit: usize,
) -> Vec<Tally> {
    let mut table = ranked(kept_tokens(selection, stop_words, matching));
    table.truncate(limit);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::SenderFilter;
    use crate::parser::parse;

    const CHAT: &str = "1/1/24, 10:00 - Alice: Hello hello WORLD\n\
                        1/1/24, 10:01 - Bob: <Media omitted>\n\
                        1/1/24, 10:02 - Bob: the world is big\n\
                        1/1/24, 10:03 - Alice added Carol";

    #[test]
    fn test_find_urls_variants() {
        let text = "a http://x.com b https://y.org/p?q=1 c www.z.net d plain.io/e f";
        assert_eq!(count_urls(text), 4);
        assert_eq!(count_urls("nothing to see"), 0);
    }

    #[test]
    fn test_find_urls_trims_trailing_punctuation() {
        let urls: Vec<&str> = find_urls("see (www.x.com). or https://y.org/p?!").collect();
        assert_eq!(urls, vec!["www.x.com", "https://y.org/p"]);
    }

    #[test]
    fn test_find_urls_skips_email_domains() {
        assert_eq!(count_urls("write to bob@mail.com"), 0);
    }

    #[test]
    fn test_stop_words_exact() {
        let stop = StopWords::from_text("The is\nA");
        assert_eq!(stop.len(), 3);
        assert!(stop.contains("the", StopWordMatching::Exact));
        assert!(stop.contains("a", StopWordMatching::Exact));
        assert!(!stop.contains("th", StopWordMatching::Exact));
    }

    #[test]
    fn test_stop_words_substring() {
        let stop = StopWords::from_text("hello world");
        assert!(stop.contains("ell", StopWordMatching::Substring));
        assert!(stop.contains("o w", StopWordMatching::Substring));
        assert!(!StopWords::empty().contains("x", StopWordMatching::Substring));
    }

    #[test]
    fn test_bundled_list_loads() {
        let stop = StopWords::bundled();
        assert!(!stop.is_empty());
        assert!(stop.contains("hai", StopWordMatching::Exact));
    }

    #[test]
    fn test_word_cloud_input_excludes_system_and_media() {
        let set = parse(CHAT).unwrap();
        let text = word_cloud_input(&set.all(), &StopWords::empty(), StopWordMatching::Exact);
        assert_eq!(text, "hello hello world the world is big");
    }

    #[test]
    fn test_word_cloud_input_removes_stop_words() {
        let set = parse(CHAT).unwrap();
        let stop = StopWords::from_text("the is");
        let text = word_cloud_input(&set.all(), &stop, StopWordMatching::Exact);
        assert_eq!(text, "hello hello world world big");
    }

    #[test]
    fn test_top_words_ranking() {
        let set = parse(CHAT).unwrap();
        let top = top_words(&set.all(), &StopWords::empty(), StopWordMatching::Exact, 3);
        assert_eq!(
            top,
            vec![
                Tally::new("hello", 2),
                Tally::new("world", 2),
                Tally::new("the", 1),
            ]
        );
    }

    #[test]
    fn test_top_words_for_participant() {
        let set = parse(CHAT).unwrap();
        let bob = set.select(&SenderFilter::participant("Bob"));
        let top = top_words(&bob, &StopWords::empty(), StopWordMatching::Exact, 20);
        assert_eq!(top.len(), 4);
        assert!(top.iter().all(|t| t.count == 1));
    }

    #[test]
    fn test_top_words_only_stop_words() {
        let set = parse("1/1/24, 10:00 - Alice: the the is").unwrap();
        let stop = StopWords::from_text("the is");
        assert!(top_words(&set.all(), &stop, StopWordMatching::Exact, 20).is_empty());
        assert!(word_cloud_input(&set.all(), &stop, StopWordMatching::Exact).is_empty());
    }
}

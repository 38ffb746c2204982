//! Per-message tone tagging.
//!
//! Tone prediction itself is delegated to a [`ToneClassifier`] supplied by
//! the caller (a trained model, a remote service, a keyword table). This
//! module prepares the input, maps the classifier's raw labels to [`Tone`],
//! and overrides the prediction with [`Tone::Informational`] for messages
//! that are clearly not conversational: media placeholders, links and
//! code-like text.
//!
//! # Example
//!
//! ```
//! use chatlens::tone::{Tone, ToneClassifier, tag_tones};
//!
//! struct Everything;
//!
//! impl ToneClassifier for Everything {
//!     fn classify(&self, messages: &[String]) -> chatlens::Result<Vec<String>> {
//!         Ok(messages.iter().map(|_| "casual".to_string()).collect())
//!     }
//! }
//!
//! let set = chatlens::parse("1/2/23, 10:00 - Alice: Hi!\n1/2/23, 10:05 - Bob: www.example.com")?;
//! let tagged = tag_tones(&set.all(), &Everything)?;
//!
//! assert_eq!(tagged[0].tone, Tone::Casual);
//! assert_eq!(tagged[1].tone, Tone::Informational);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{ChatlensError, Result};
use crate::metrics::{Selection, Tally, ranked};
use crate::record::MessageRecord;

/// Substrings that mark a lowercased message as code-like.
const CODE_MARKERS: [&str; 8] = [";", "{", "}", "==", "#", "//", "<>", "()"];

/// Predicts a raw tone label for each message.
pub trait ToneClassifier {
    /// Returns exactly one label per input message, in the same order.
    ///
    /// Inputs are lowercased, trimmed and never empty.
    fn classify(&self, messages: &[String]) -> Result<Vec<String>>;
}

/// The conversational tone of one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Romantic,
    Sarcastic,
    Argumentative,
    Casual,
    /// Media, links and code-like text.
    Informational,
    /// The classifier returned a label outside the known set.
    Unknown,
}

impl Tone {
    /// Maps a classifier label to a tone. Unrecognized labels give
    /// [`Tone::Unknown`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "romantic" => Tone::Romantic,
            "sarcastic" => Tone::Sarcastic,
            "argumentative" => Tone::Argumentative,
            "casual" => Tone::Casual,
            _ => Tone::Unknown,
        }
    }

    /// Display label with its emoji.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Romantic => "Romantic ❤️",
            Tone::Sarcastic => "Sarcastic 😜",
            Tone::Argumentative => "Argumentative 😡",
            Tone::Casual => "Casual 😎",
            Tone::Informational => "Informational 📂",
            Tone::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns `true` if the lowercased `text` is informational rather than
/// conversational.
///
/// ```
/// use chatlens::tone::is_informational;
///
/// assert!(is_informational("<media omitted>"));
/// assert!(is_informational("see http://x"));
/// assert!(is_informational("if (a == b)"));
/// assert!(!is_informational("good morning"));
/// ```
pub fn is_informational(text: &str) -> bool {
    text.contains("<media omitted>")
        || text.contains("http")
        || text.contains("www.")
        || CODE_MARKERS.iter().any(|marker| text.contains(marker))
}

/// A record together with its tone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedMessage<'a> {
    pub record: &'a MessageRecord,
    /// The normalized text that was classified.
    pub text: String,
    pub tone: Tone,
}

/// Tags every non-empty message in `selection`.
///
/// Bodies are lowercased and trimmed first; messages left empty are dropped
/// and never reach the classifier.
pub fn tag_tones<'a, C>(selection: &Selection<'a>, classifier: &C) -> Result<Vec<TaggedMessage<'a>>>
where
    C: ToneClassifier + ?Sized,
{
    let (records, texts): (Vec<&'a MessageRecord>, Vec<String>) = selection
        .iter()
        .map(|record| (record, record.body().to_lowercase().trim().to_string()))
        .filter(|(_, text)| !text.is_empty())
        .unzip();

    if texts.is_empty() {
        return Ok(Vec::new());
    }

    let labels = classifier.classify(&texts)?;
    if labels.len() != texts.len() {
        return Err(ChatlensError::classifier(format!(
            "expected {} labels, got {}",
            texts.len(),
            labels.len()
        )));
    }
    debug!(messages = texts.len(), "Classified message tones");

    Ok(records
        .into_iter()
        .zip(texts)
        .zip(labels)
        .map(|((record, text), label)| {
            let tone = if is_informational(&text) {
                Tone::Informational
            } else {
                Tone::from_label(&label)
            };
            TaggedMessage { record, text, tone }
        })
        .collect())
}

/// Number of messages per tone, most common first.
pub fn tone_distribution(tagged: &[TaggedMessage<'_>]) -> Vec<Tally> {
    ranked(tagged.iter().map(|t| t.tone.label()))
}

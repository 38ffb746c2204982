//! Sender attribution for message chunks.

use lazy_static::lazy_static;
use regex::Regex;

use crate::record::Sender;

lazy_static! {
    // Name runs to the first ": " on the chunk's first line.
    static ref SENDER_PREFIX: Regex = Regex::new(r"^([^:\n]+):\s").unwrap();
}

/// Splits a leading `"<name>: "` prefix off a message chunk.
///
/// Chunks without a prefix are system lines ("Alice added Carol",
/// encryption notices, ...): they get [`Sender::Notification`] and the whole
/// chunk as body.
///
/// ```
/// use chatlens::parsing::sender::split_sender;
/// use chatlens::record::Sender;
///
/// assert_eq!(
///     split_sender("Alice: Hello: world"),
///     (Sender::participant("Alice"), "Hello: world")
/// );
/// assert_eq!(
///     split_sender("Alice added Carol"),
///     (Sender::Notification, "Alice added Carol")
/// );
/// ```
pub fn split_sender(chunk: &str) -> (Sender, &str) {
    match SENDER_PREFIX.captures(chunk) {
        Some(caps) => {
            let name = caps.get(1).map_or("", |m| m.as_str());
            let rest = caps.get(0).map_or(chunk, |m| &chunk[m.end()..]);
            (Sender::participant(name), rest)
        }
        None => (Sender::Notification, chunk),
    }
}

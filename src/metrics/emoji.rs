//! Emoji frequency.

use super::filter::Selection;
use super::tally::{Tally, ranked};

/// Skin-tone modifiers, which the emoji table only lists inside sequences.
const SKIN_TONES: std::ops::RangeInclusive<char> = '\u{1F3FB}'..='\u{1F3FF}';

/// Returns `true` if `c` on its own is a known emoji or a skin-tone modifier.
pub fn is_emoji(c: char) -> bool {
    let mut buf = [0u8; 4];
    SKIN_TONES.contains(&c) || emojis::get(c.encode_utf8(&mut buf)).is_some()
}

/// Counts every emoji character across the selection, most used first.
///
/// Detection is per character, so multi-codepoint sequences are counted by
/// their emoji components. System lines are included under Overall.
///
/// ```
/// use chatlens::metrics::emoji_counts;
///
/// let set = chatlens::parse("1/1/24, 10:00 - Alice: 😂😂 nice 🔥")?;
/// let table = emoji_counts(&set.all());
/// assert_eq!(table[0].label, "😂");
/// assert_eq!(table[0].count, 2);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn emoji_counts(selection: &Selection<'_>) -> Vec<Tally> {
    ranked(
        selection
            .iter()
            .flat_map(|record| record.body().chars())
            .filter(|&c| is_emoji(c))
            .map(String::from),
    )
}

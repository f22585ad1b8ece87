//! Splitting text into blocks that fit Notion's rich-text limit.
//!
//! Notion rejects a single rich-text object longer than 2000 characters,
//! counted in UTF-16 code units, so long bodies are sent as several
//! consecutive objects.

use std::num::NonZeroUsize;

/// UTF-16 code units per rich-text object. Leaves headroom below the 2000
/// limit.
pub const MAX_RICH_TEXT_UNITS: NonZeroUsize = NonZeroUsize::new(1900).unwrap();

/// Split `text` into consecutive slices of at most `max_units` UTF-16 code
/// units each.
///
/// Boundaries never fall inside a character, concatenating the slices gives
/// back `text`, and empty input yields no slices. A character wider than
/// `max_units` (a surrogate pair with `max_units == 1`) gets a slice of its
/// own.
///
/// ```rust
/// use std::num::NonZeroUsize;
/// use draftsmith_notion::chunk::chunk_text;
///
/// let chunks = chunk_text("abcdefg", NonZeroUsize::new(3).unwrap());
/// assert_eq!(chunks, ["abc", "def", "g"]);
/// ```
pub fn chunk_text(text: &str, max_units: NonZeroUsize) -> Vec<&str> {
    let max = max_units.get();
    let mut chunks = Vec::with_capacity(text.len() / max + 1);
    let mut start = 0;
    let mut units = 0;

    for (index, c) in text.char_indices() {
        let width = c.len_utf16();
        if units + width > max && index > start {
            chunks.push(&text[start..index]);
            start = index;
            units = 0;
        }
        units += width;
    }

    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}

use crate::error::{ClausewiseError, Result};

/// Characters of surrounding text kept on each side of a match.
pub const CONTEXT_RADIUS: usize = 50;

/// Slice `radius` characters before `start` and after `end` (byte offsets on
/// char boundaries), clipped to the text bounds and trimmed.
#[must_use]
pub fn context_window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let from = if radius == 0 {
        start
    } else {
        text[..start]
            .char_indices()
            .rev()
            .nth(radius - 1)
            .map_or(0, |(i, _)| i)
    };
    let to = text[end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| end + i);
    text[from..to].trim()
}

/// Convert a byte offset into a character offset.
#[must_use]
pub fn char_offset(text: &str, byte_idx: usize) -> usize {
    text[..byte_idx].chars().count()
}

/// Sentence-like segments: the text split on every `.`, each trimmed.
/// Empty segments are kept so callers see the same segmentation everywhere.
pub fn sentence_segments(text: &str) -> impl Iterator<Item = &str> {
    text.split('.').map(str::trim)
}

#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Validate raw input bytes as document text.
pub fn decode_text(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| {
        ClausewiseError::Validation(format!(
            "document text is not valid UTF-8 (at byte {})",
            e.valid_up_to()
        ))
    })
}

use xi_rope::Rope;

use super::span::SourceSpan;

/// Extracts the text a span points at, or `None` when it falls outside the
/// rope or off a char boundary.
pub fn slice_source(rope: &Rope, span: SourceSpan) -> Option<String> {
    let range = span.input_range();
    if range.end > rope.len() {
        return None;
    }
    let text = rope.slice_to_cow(..);
    text.get(range.start..range.end).map(str::to_owned)
}

/// Truncates `text` to at most `max` bytes with a "..." suffix.
///
/// Used for human-readable tree dumps.
pub fn preview(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_owned();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

use xi_rope::Rope;

use super::{line::SourceLine, span::SourceSpan};

/// Returns an iterator over the rope's lines as [`SourceLine`]s.
///
/// Uses `lines_raw` so byte offsets stay exact; the `\n` or `\r\n`
/// terminator is stripped from the content but still counted when
/// advancing the input offset.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = SourceLine> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).enumerate().map(move |(index, raw)| {
        let start = offset;
        offset += raw.len();
        let content = raw.trim_end_matches('\n').trim_end_matches('\r');
        let span = SourceSpan::new(index, 0, start, content.len());
        SourceLine::new(content, Some(span))
    })
}

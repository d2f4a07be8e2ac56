use crate::parsing::{
    source::{SourceSpan, SourceSpans},
    tree::{NodeId, NodeKind, Tree},
};

/// One piece of a text leaf being split up. Offsets are byte offsets into
/// the leaf's literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Untouched text `literal[start..end]`.
    Text { start: usize, end: usize },
    /// A link whose display text stands for `literal[start..end]`.
    Link {
        destination: String,
        display: String,
        start: usize,
        end: usize,
    },
}

/// Replaces the text leaf `original` by `fragments`, in order.
///
/// Fragment spans are sliced out of the leaf's span, but only when the leaf
/// has exactly one span covering its whole literal byte for byte. A leaf
/// whose literal differs in length from its source (a backslash escape or a
/// merged run spanning several lines) has no offset map back to the input,
/// so its fragments carry no span rather than a shifted one. Returns the
/// number of links created.
pub fn split_text(tree: &mut Tree, original: NodeId, fragments: Vec<Fragment>) -> usize {
    let Some(literal) = tree.get(original).text().map(str::to_owned) else {
        return 0;
    };
    let span = tree
        .get(original)
        .source_spans
        .single()
        .filter(|span| span.length == literal.len());
    let slice = |start: usize, end: usize| -> SourceSpans {
        span.and_then(|s: SourceSpan| s.subspan(start, end))
            .map(SourceSpans::from)
            .unwrap_or_default()
    };

    let mut links = 0;
    let mut last = original;
    for fragment in fragments {
        let node = match fragment {
            Fragment::Text { start, end } => {
                let Some(text) = literal.get(start..end).filter(|t| !t.is_empty()) else {
                    continue;
                };
                tree.create_with_spans(NodeKind::Text(text.to_owned()), slice(start, end))
            }
            Fragment::Link {
                destination,
                display,
                start,
                end,
            } => {
                let spans = slice(start, end);
                let text = tree.create_with_spans(NodeKind::Text(display), spans.clone());
                let link = tree.create_with_spans(
                    NodeKind::Link {
                        destination,
                        title: None,
                    },
                    spans,
                );
                tree.append_child(link, text);
                links += 1;
                link
            }
        };
        tree.insert_after(last, node);
        last = node;
    }
    tree.unlink(original);
    links
}

/// Fragments for `matches` (sorted, non-overlapping `(start, end, link)`
/// triples) with the untouched text around them.
pub fn fragments_around<I>(literal_len: usize, matches: I) -> Vec<Fragment>
where
    I: IntoIterator<Item = (usize, usize, Fragment)>,
{
    let mut out = Vec::new();
    let mut pos = 0;
    for (start, end, link) in matches {
        if start > pos {
            out.push(Fragment::Text { start: pos, end: start });
        }
        out.push(link);
        pos = end;
    }
    if pos < literal_len {
        out.push(Fragment::Text {
            start: pos,
            end: literal_len,
        });
    }
    out
}

use crate::parsing::tree::{NodeId, Tree};

use super::{
    PostProcessor, for_each_text_outside_links,
    split::{Fragment, fragments_around, split_text},
};

/// The two Trac link prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracLinkKind {
    Wiki,
    Ticket,
}

impl TracLinkKind {
    pub fn prefix(self) -> &'static str {
        match self {
            TracLinkKind::Wiki => "wiki:",
            TracLinkKind::Ticket => "ticket:",
        }
    }

    /// `ticket:12` shows as `#12`, any other ticket name keeps its prefix,
    /// wiki pages show their bare name.
    pub fn display_text(self, name: &str) -> String {
        match self {
            TracLinkKind::Ticket if name.bytes().all(|b| b.is_ascii_digit()) => format!("#{name}"),
            TracLinkKind::Ticket => format!("ticket:{name}"),
            TracLinkKind::Wiki => name.to_owned(),
        }
    }
}

const KINDS: [TracLinkKind; 2] = [TracLinkKind::Wiki, TracLinkKind::Ticket];

/// A `wiki:` / `ticket:` reference found in a text literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracLinkMatch {
    pub kind: TracLinkKind,
    /// Byte offset of the prefix.
    pub start: usize,
    /// Byte offset just past the match, closing quote included.
    pub end: usize,
    /// Byte range of the captured name.
    pub name_start: usize,
    pub name_end: usize,
}

impl TracLinkMatch {
    pub fn name<'a>(&self, literal: &'a str) -> &'a str {
        &literal[self.name_start..self.name_end]
    }
}

/// Characters that end an unquoted name.
fn ends_name(c: char) -> bool {
    c.is_whitespace() || matches!(c, '.' | ',' | ';' | '"')
}

/// Finds the earliest reference starting at or after `from`.
///
/// A name is either `"quoted"` (anything but `"`, at least one character) or
/// a run of characters up to whitespace, `.`, `,`, `;` or `"`.
pub fn find_trac_link(literal: &str, from: usize) -> Option<TracLinkMatch> {
    let mut search = from;
    while let Some(offset) = literal.get(search..)?.find(['w', 't']) {
        let start = search + offset;
        let rest = &literal[start..];
        for kind in KINDS {
            if rest.starts_with(kind.prefix()) {
                if let Some(m) = match_name(literal, start, kind) {
                    return Some(m);
                }
            }
        }
        search = start + 1;
    }
    None
}

fn match_name(literal: &str, start: usize, kind: TracLinkKind) -> Option<TracLinkMatch> {
    let name_start = start + kind.prefix().len();
    let rest = &literal[name_start..];
    if let Some(quoted) = rest.strip_prefix('"') {
        let close = quoted.find('"').filter(|&len| len > 0)?;
        let name_start = name_start + 1;
        return Some(TracLinkMatch {
            kind,
            start,
            end: name_start + close + 1,
            name_start,
            name_end: name_start + close,
        });
    }
    let len = rest.find(ends_name).unwrap_or(rest.len());
    (len > 0).then(|| TracLinkMatch {
        kind,
        start,
        end: name_start + len,
        name_start,
        name_end: name_start + len,
    })
}

/// All non-overlapping references, left to right.
pub fn find_trac_links(literal: &str) -> Vec<TracLinkMatch> {
    let mut out = Vec::new();
    let mut pos = 0;
    while let Some(m) = find_trac_link(literal, pos) {
        pos = m.end;
        out.push(m);
    }
    out
}

/// Rewrites `wiki:` and `ticket:` references in text leaves into links.
///
/// Text already inside a link is left alone. A link's display text carries
/// the span of the captured name.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracLinkRewriter;

impl TracLinkRewriter {
    fn rewrite(tree: &mut Tree, node: NodeId) -> usize {
        let Some(literal) = tree.get(node).text() else {
            return 0;
        };
        let matches = find_trac_links(literal);
        if matches.is_empty() {
            return 0;
        }
        let fragments = fragments_around(
            literal.len(),
            matches.iter().map(|m| {
                let name = m.name(literal);
                let link = Fragment::Link {
                    destination: format!("{}{name}", m.kind.prefix()),
                    display: m.kind.display_text(name),
                    start: m.name_start,
                    end: m.name_end,
                };
                (m.start, m.end, link)
            }),
        );
        split_text(tree, node, fragments)
    }
}

impl PostProcessor for TracLinkRewriter {
    fn name(&self) -> &'static str {
        "trac links"
    }

    fn process(&self, tree: &mut Tree) -> usize {
        for_each_text_outside_links(tree, Self::rewrite)
    }
}

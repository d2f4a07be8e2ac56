use crate::parsing::{
    inline::delimiter::{DelimiterProcessor, DelimiterRun},
    source::SourceSpans,
    tree::{NodeKind, Tree},
};

/// Trac emphasis with apostrophes: `''em''`, `'''strong'''`, and five-mark
/// runs resolving as emphasis around strong.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracEmphasis;

impl TracEmphasis {
    pub const MARKER: char = '\'';
    pub const EMPHASIS_LEN: usize = 2;
    pub const STRONG_LEN: usize = 3;
}

impl DelimiterProcessor for TracEmphasis {
    fn opening_char(&self) -> char {
        Self::MARKER
    }

    fn closing_char(&self) -> char {
        Self::MARKER
    }

    fn min_length(&self) -> usize {
        Self::EMPHASIS_LEN
    }

    fn process(&self, tree: &mut Tree, opening: &DelimiterRun, closing: &DelimiterRun) -> usize {
        // A leftover single mark is plain text, never half an emphasis.
        if opening.length() < Self::EMPHASIS_LEN || closing.length() < Self::EMPHASIS_LEN {
            return 0;
        }
        let used = if opening.length() >= Self::STRONG_LEN && closing.length() >= Self::STRONG_LEN {
            Self::STRONG_LEN
        } else {
            Self::EMPHASIS_LEN
        };
        let delimiter = Self::MARKER.to_string().repeat(used);
        let kind = if used == Self::STRONG_LEN {
            NodeKind::StrongEmphasis { delimiter }
        } else {
            NodeKind::Emphasis { delimiter }
        };
        wrap(tree, opening, closing, used, kind);
        used
    }
}

/// CommonMark `*` / `_` emphasis.
#[derive(Debug, Clone, Copy)]
pub struct CoreEmphasis {
    marker: char,
}

impl CoreEmphasis {
    pub const fn new(marker: char) -> Self {
        Self { marker }
    }
}

impl DelimiterProcessor for CoreEmphasis {
    fn opening_char(&self) -> char {
        self.marker
    }

    fn closing_char(&self) -> char {
        self.marker
    }

    fn process(&self, tree: &mut Tree, opening: &DelimiterRun, closing: &DelimiterRun) -> usize {
        // "Multiple of 3" rule for runs that can both open and close.
        if (opening.can_close() || closing.can_open())
            && closing.original_length() % 3 != 0
            && (opening.original_length() + closing.original_length()) % 3 == 0
        {
            return 0;
        }
        let used = if opening.length() >= 2 && closing.length() >= 2 {
            2
        } else {
            1
        };
        let delimiter = self.marker.to_string().repeat(used);
        let kind = if used == 2 {
            NodeKind::StrongEmphasis { delimiter }
        } else {
            NodeKind::Emphasis { delimiter }
        };
        wrap(tree, opening, closing, used, kind);
        used
    }
}

static TRAC_EMPHASIS: TracEmphasis = TracEmphasis;
static STAR_EMPHASIS: CoreEmphasis = CoreEmphasis::new('*');
static UNDERSCORE_EMPHASIS: CoreEmphasis = CoreEmphasis::new('_');

/// The processor registered for a delimiter character.
pub fn processor_for(c: char) -> Option<&'static dyn DelimiterProcessor> {
    match c {
        TracEmphasis::MARKER => Some(&TRAC_EMPHASIS),
        '*' => Some(&STAR_EMPHASIS),
        '_' => Some(&UNDERSCORE_EMPHASIS),
        _ => None,
    }
}

/// Moves the nodes between the two runs into a new `kind` node inserted after
/// the innermost opener. Its spans are the used openers, the enclosed nodes
/// and the used closers, in order.
fn wrap(tree: &mut Tree, opening: &DelimiterRun, closing: &DelimiterRun, used: usize, kind: NodeKind) {
    let mut spans = SourceSpans::empty();
    for id in opening.openers(used) {
        spans.add_all(&tree.get(*id).source_spans);
    }
    let opener = opening.opener();
    let wrapper = tree.create(kind);
    for node in tree.between(opener, closing.closer()) {
        tree.append_child(wrapper, node);
        spans.add_all(&tree.get(node).source_spans);
    }
    for id in closing.closers(used) {
        spans.add_all(&tree.get(*id).source_spans);
    }
    tree.set_source_spans(wrapper, spans);
    tree.insert_after(opener, wrapper);
}

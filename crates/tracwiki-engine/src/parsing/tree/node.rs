use crate::parsing::source::SourceSpans;

/// Stable index of a node in a [`Tree`](super::Tree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(super) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Literal data of a `{{{ ... }}}` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedCode {
    pub fence_char: char,
    pub fence_length: usize,
    pub fence_indent: usize,
    /// Declared info string (the `#!` syntax tag), empty when none.
    pub info: String,
    /// Body lines, each terminated by `\n`.
    pub literal: String,
}

/// Every kind of node the parser can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Paragraph,
    Heading {
        /// 1..=6
        level: u8,
    },
    FencedCodeBlock(FencedCode),
    BlockQuote,
    ThematicBreak,
    Text(String),
    /// Inline code span.
    Code(String),
    SoftBreak,
    Emphasis {
        delimiter: String,
    },
    StrongEmphasis {
        delimiter: String,
    },
    Link {
        destination: String,
        title: Option<String>,
    },
}

impl NodeKind {
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            NodeKind::Document
                | NodeKind::Paragraph
                | NodeKind::Heading { .. }
                | NodeKind::FencedCodeBlock(_)
                | NodeKind::BlockQuote
                | NodeKind::ThematicBreak
        )
    }

    /// Short name used in tree dumps and log lines.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Heading { .. } => "Heading",
            NodeKind::FencedCodeBlock(_) => "FencedCodeBlock",
            NodeKind::BlockQuote => "BlockQuote",
            NodeKind::ThematicBreak => "ThematicBreak",
            NodeKind::Text(_) => "Text",
            NodeKind::Code(_) => "Code",
            NodeKind::SoftBreak => "SoftBreak",
            NodeKind::Emphasis { .. } => "Emphasis",
            NodeKind::StrongEmphasis { .. } => "StrongEmphasis",
            NodeKind::Link { .. } => "Link",
        }
    }
}

/// A node plus its links into the tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub source_spans: SourceSpans,
    pub(super) parent: Option<NodeId>,
    pub(super) first_child: Option<NodeId>,
    pub(super) last_child: Option<NodeId>,
    pub(super) prev: Option<NodeId>,
    pub(super) next: Option<NodeId>,
}

impl Node {
    pub(super) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            source_spans: SourceSpans::empty(),
            parent: None,
            first_child: None,
            last_child: None,
            prev: None,
            next: None,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    pub fn last_child(&self) -> Option<NodeId> {
        self.last_child
    }

    pub fn prev(&self) -> Option<NodeId> {
        self.prev
    }

    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    /// The literal of a `Text` node.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(s) => Some(s),
            _ => None,
        }
    }
}

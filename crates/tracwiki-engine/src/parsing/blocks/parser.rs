use crate::parsing::{
    source::{SourceLine, SourceLines},
    tree::NodeKind,
};

use super::{
    kinds::{
        BlockQuoteParser, CodeFenceParser, HeadingParser, IndentedQuoteParser, ParagraphParser,
    },
    state::LineState,
    types::BlockContinue,
};

/// An open block and the state it accumulates until it is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockParser {
    Document,
    Paragraph(ParagraphParser),
    Heading(HeadingParser),
    CodeFence(CodeFenceParser),
    IndentedQuote(IndentedQuoteParser),
    BlockQuote(BlockQuoteParser),
    ThematicBreak,
}

/// What a block leaves behind when it closes.
#[derive(Debug)]
pub struct ClosedBlock {
    /// Final node kind, when it differs from the one created on open.
    pub kind: Option<NodeKind>,
    /// Raw inline content still to be parsed.
    pub inline: Option<SourceLines>,
}

impl BlockParser {
    /// Node created when the block opens.
    pub fn node_kind(&self) -> NodeKind {
        match self {
            BlockParser::Document => NodeKind::Document,
            BlockParser::Paragraph(_) => NodeKind::Paragraph,
            BlockParser::Heading(h) => NodeKind::Heading { level: h.level() },
            BlockParser::CodeFence(c) => NodeKind::FencedCodeBlock(c.clone().close()),
            BlockParser::IndentedQuote(_) | BlockParser::BlockQuote(_) => NodeKind::BlockQuote,
            BlockParser::ThematicBreak => NodeKind::ThematicBreak,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BlockParser::Document => "document",
            BlockParser::Paragraph(_) => "paragraph",
            BlockParser::Heading(_) => "heading",
            BlockParser::CodeFence(_) => "code fence",
            BlockParser::IndentedQuote(_) => "indented quote",
            BlockParser::BlockQuote(_) => "block quote",
            BlockParser::ThematicBreak => "thematic break",
        }
    }

    /// Containers hold other blocks; everything else is a leaf.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            BlockParser::Document | BlockParser::IndentedQuote(_) | BlockParser::BlockQuote(_)
        )
    }

    pub fn is_paragraph(&self) -> bool {
        matches!(self, BlockParser::Paragraph(_))
    }

    /// A `>` quote may be skipped by a lazy paragraph continuation line.
    pub fn allows_lazy_continuation(&self) -> bool {
        matches!(self, BlockParser::BlockQuote(_))
    }

    pub fn try_continue(&self, state: &LineState) -> BlockContinue {
        match self {
            BlockParser::Document => BlockContinue::at_index(state.index()),
            BlockParser::Paragraph(p) => p.try_continue(state),
            BlockParser::CodeFence(c) => c.try_continue(state),
            BlockParser::IndentedQuote(q) => q.try_continue(state),
            BlockParser::BlockQuote(q) => q.try_continue(state),
            BlockParser::Heading(_) | BlockParser::ThematicBreak => BlockContinue::None,
        }
    }

    /// Hands the remainder of a line to a leaf. Leaves that are complete
    /// after their first line ignore it.
    pub fn add_line(&mut self, line: &SourceLine) {
        match self {
            BlockParser::Paragraph(p) => p.add_line(line),
            BlockParser::CodeFence(c) => c.add_line(line),
            _ => {}
        }
    }

    pub fn close(self) -> ClosedBlock {
        match self {
            BlockParser::Paragraph(p) => ClosedBlock {
                kind: None,
                inline: Some(p.into_lines()),
            },
            BlockParser::Heading(h) => ClosedBlock {
                kind: None,
                inline: Some(h.into_content()),
            },
            BlockParser::CodeFence(c) => ClosedBlock {
                kind: Some(NodeKind::FencedCodeBlock(c.close())),
                inline: None,
            },
            _ => ClosedBlock {
                kind: None,
                inline: None,
            },
        }
    }
}

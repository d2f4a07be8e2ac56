use log::trace;

use crate::parsing::{
    source::{SourceLine, SourceLines},
    tree::{NodeId, Tree},
};

use super::{
    kinds::ParagraphParser,
    open::try_start,
    parser::BlockParser,
    state::LineState,
    types::{BlockContinue, Resume},
};

#[derive(Debug)]
struct OpenBlock {
    parser: BlockParser,
    node: NodeId,
    /// Byte index on the current line where this block's share begins.
    source_index: usize,
}

/// Raw inline content of a closed leaf, parsed once the block tree is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineContent {
    pub block: NodeId,
    pub lines: SourceLines,
}

/// Output of the block phase.
#[derive(Debug)]
pub struct BlockTree {
    pub tree: Tree,
    /// In document order.
    pub inline_content: Vec<InlineContent>,
}

/// Line-at-a-time block construction over a stack of open blocks.
///
/// For every line: open blocks are asked to continue, outermost first; where
/// the chain breaks, recognizers get a chance to start new blocks; the rest of
/// the line goes to the innermost leaf (or a new paragraph). Unmatched blocks
/// are closed, except that a paragraph line may lazily continue through `>`
/// quotes whose marker is missing.
pub struct BlockBuilder {
    tree: Tree,
    open: Vec<OpenBlock>,
    inline_content: Vec<InlineContent>,
    line_index: usize,
}

impl BlockBuilder {
    pub fn new() -> Self {
        let tree = Tree::new();
        let root = tree.root();
        Self {
            tree,
            open: vec![OpenBlock {
                parser: BlockParser::Document,
                node: root,
                source_index: 0,
            }],
            inline_content: Vec::new(),
            line_index: 0,
        }
    }

    pub fn push(&mut self, line: SourceLine) {
        let mut state = LineState::new(line, self.line_index);
        self.line_index += 1;

        let mut matched = 1;
        for i in 1..self.open.len() {
            let source_index = state.index();
            match self.open[i].parser.try_continue(&state) {
                BlockContinue::At(resume) => {
                    self.open[i].source_index = source_index;
                    state.advance(resume);
                    matched += 1;
                }
                BlockContinue::Finished => {
                    self.open[i].source_index = source_index;
                    self.add_source_spans(&state);
                    self.close_from(i);
                    return;
                }
                BlockContinue::None => break,
            }
        }

        let mut all_closed = matched == self.open.len();
        let last_matched = &self.open[matched - 1].parser;
        let mut can_start = last_matched.is_container() || last_matched.is_paragraph();
        while can_start {
            if state.is_blank() {
                state.advance(Resume::Index(state.next_non_space()));
                break;
            }
            let source_index = state.index();
            let Some(start) = try_start(&state) else {
                state.advance(Resume::Index(state.next_non_space()));
                break;
            };
            if !all_closed {
                self.close_from(matched);
                all_closed = true;
            }
            state.advance(start.resume);
            can_start = start.parser.is_container();
            self.add_child(start.parser, source_index);
        }

        if !all_closed && self.is_lazy_continuation(matched, &state) {
            trace!("lazy continuation at line {}", state.line_index());
            let index = state.index();
            for block in &mut self.open[matched..] {
                block.source_index = index;
            }
            self.top_mut().parser.add_line(&state.rest());
        } else {
            if !all_closed {
                self.close_from(matched);
            }
            if !self.top().parser.is_container() {
                self.top_mut().parser.add_line(&state.rest());
            } else if !state.is_blank() {
                self.add_child(BlockParser::Paragraph(ParagraphParser::new()), state.index());
                self.top_mut().parser.add_line(&state.rest());
            }
        }
        self.add_source_spans(&state);
    }

    pub fn finish(mut self) -> BlockTree {
        self.close_from(1);
        self.inline_content.sort_by_key(|c| c.block);
        BlockTree {
            tree: self.tree,
            inline_content: self.inline_content,
        }
    }

    /// The innermost open block is a paragraph and every other unmatched
    /// block is a `>` quote.
    fn is_lazy_continuation(&self, matched: usize, state: &LineState) -> bool {
        let Some((innermost, unmatched)) = self.open[matched..].split_last() else {
            return false;
        };
        !state.is_blank()
            && innermost.parser.is_paragraph()
            && unmatched.iter().all(|b| b.parser.allows_lazy_continuation())
    }

    fn top(&self) -> &OpenBlock {
        &self.open[self.open.len() - 1]
    }

    fn top_mut(&mut self) -> &mut OpenBlock {
        let last = self.open.len() - 1;
        &mut self.open[last]
    }

    fn add_child(&mut self, parser: BlockParser, source_index: usize) {
        while !self.top().parser.is_container() {
            self.close_from(self.open.len() - 1);
        }
        let parent = self.top().node;
        let node = self.tree.create(parser.node_kind());
        self.tree.append_child(parent, node);
        trace!("open {} at line {}", parser.name(), self.line_index - 1);
        self.open.push(OpenBlock {
            parser,
            node,
            source_index,
        });
    }

    /// Closes every open block at depth `depth` and deeper. The document
    /// itself is never closed here.
    fn close_from(&mut self, depth: usize) {
        while self.open.len() > depth.max(1) {
            if let Some(block) = self.open.pop() {
                self.finalize(block);
            }
        }
    }

    fn finalize(&mut self, block: OpenBlock) {
        trace!("close {} {:?}", block.parser.name(), block.node);
        let closed = block.parser.close();
        if let Some(kind) = closed.kind {
            self.tree.get_mut(block.node).kind = kind;
        }
        if let Some(lines) = closed.inline {
            self.inline_content.push(InlineContent {
                block: block.node,
                lines,
            });
        }
    }

    fn add_source_spans(&mut self, state: &LineState) {
        let len = state.content().len();
        for block in &self.open[1..] {
            if let Some(span) = state.line().substring(block.source_index, len).source_span() {
                self.tree.get_mut(block.node).source_spans.add(span);
            }
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

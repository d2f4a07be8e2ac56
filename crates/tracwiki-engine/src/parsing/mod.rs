pub mod blocks;
pub mod inline;
pub mod options;
pub mod postprocess;
pub mod snapshot;
pub mod source;
pub mod tree;

#[cfg(test)]
mod tests;

use log::debug;
use xi_rope::Rope;

use blocks::BlockBuilder;
use source::lines_with_spans;

pub use options::ParseOptions;
pub use tree::{NodeId, NodeKind, Tree};

#[derive(Debug)]
pub struct ParsedDoc {
    pub tree: Tree,
}

/// Parses a whole document: block structure, then inline content of every
/// leaf in document order, then the post-processing passes.
pub fn parse_document(rope: &Rope, options: &ParseOptions) -> ParsedDoc {
    let mut builder = BlockBuilder::new();
    let mut line_count = 0;
    for line in lines_with_spans(rope) {
        builder.push(line);
        line_count += 1;
    }
    let blocks = builder.finish();
    let mut tree = blocks.tree;

    for content in &blocks.inline_content {
        inline::parse_inlines(&mut tree, content.block, &content.lines);
    }
    postprocess::run(&mut tree, options);

    debug!(
        "parsed {} line(s) into {} node(s), {} inline block(s)",
        line_count,
        tree.len(),
        blocks.inline_content.len()
    );
    ParsedDoc { tree }
}

/// Convenience: [`parse_document`] over a string.
pub fn parse(text: &str, options: &ParseOptions) -> ParsedDoc {
    parse_document(&Rope::from(text), options)
}

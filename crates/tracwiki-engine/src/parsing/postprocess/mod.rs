//! # Post-processing
//!
//! Whole-tree passes that run once blocks and inlines are complete. Each pass
//! only ever replaces a text leaf by siblings; block structure is untouched.
//!
//! Order matters: URLs are linked first, so a `wiki:` inside a URL belongs to
//! the URL link and is not rewritten again.

pub mod autolink;
pub mod split;
pub mod trac_links;

use log::debug;

use crate::parsing::{
    ParseOptions,
    tree::{NodeId, NodeKind, Tree},
};

pub use autolink::UrlAutolinker;
pub use trac_links::TracLinkRewriter;

/// A pass over the finished tree.
pub trait PostProcessor {
    fn name(&self) -> &'static str;

    /// Rewrites the tree in place, returning the number of nodes it created
    /// links for.
    fn process(&self, tree: &mut Tree) -> usize;
}

/// The passes enabled by `options`, in the order they run.
pub fn post_processors(options: &ParseOptions) -> Vec<Box<dyn PostProcessor>> {
    let mut out: Vec<Box<dyn PostProcessor>> = Vec::new();
    if options.autolink_urls {
        out.push(Box::new(UrlAutolinker));
    }
    if options.trac_links {
        out.push(Box::new(TracLinkRewriter));
    }
    out
}

pub fn run(tree: &mut Tree, options: &ParseOptions) {
    for processor in post_processors(options) {
        let links = processor.process(tree);
        debug!("{}: {} link(s)", processor.name(), links);
    }
}

/// Calls `f` on every `Text` node that has no `Link` ancestor.
///
/// The next sibling is fetched before `f` runs, so nodes that `f` inserts
/// after the visited one are not visited again.
pub fn for_each_text_outside_links<F>(tree: &mut Tree, mut f: F) -> usize
where
    F: FnMut(&mut Tree, NodeId) -> usize,
{
    let root = tree.root();
    visit(tree, root, 0, &mut f)
}

fn visit<F>(tree: &mut Tree, parent: NodeId, link_depth: usize, f: &mut F) -> usize
where
    F: FnMut(&mut Tree, NodeId) -> usize,
{
    let mut count = 0;
    let mut child = tree.first_child(parent);
    while let Some(c) = child {
        child = tree.next_sibling(c);
        count += match tree.kind(c) {
            NodeKind::Link { .. } => visit(tree, c, link_depth + 1, f),
            NodeKind::Text(_) if link_depth == 0 => f(tree, c),
            _ => visit(tree, c, link_depth, f),
        };
    }
    count
}

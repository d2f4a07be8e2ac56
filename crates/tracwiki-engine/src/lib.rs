pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use parsing::{NodeId, NodeKind, ParseOptions, ParsedDoc, Tree, parse, parse_document};
pub use render::{HtmlRenderer, RenderOptions};

/// Parses `text` and renders it to HTML in one call.
pub fn to_html(text: &str, parse_options: &ParseOptions, render_options: &RenderOptions) -> String {
    let doc = parse(text, parse_options);
    HtmlRenderer::new(render_options.clone()).render(&doc.tree)
}

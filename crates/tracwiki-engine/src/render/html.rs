use html_escape::{encode_double_quoted_attribute, encode_text};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::parsing::tree::{FencedCode, NodeId, NodeKind, Tree};

use super::{COMMENT_INFO, RenderOptions};

/// Characters escaped in link destinations. Reserved URL characters and `%`
/// pass through so already-encoded destinations stay intact.
const HREF_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, tree: &Tree) -> String {
        let mut out = String::new();
        self.render_node(tree, tree.root(), &mut out);
        out
    }

    fn render_children(&self, tree: &Tree, id: NodeId, out: &mut String) {
        for child in tree.children(id) {
            self.render_node(tree, child, out);
        }
    }

    fn render_node(&self, tree: &Tree, id: NodeId, out: &mut String) {
        match tree.kind(id) {
            NodeKind::Document => self.render_children(tree, id, out),
            NodeKind::Paragraph => {
                out.push_str("<p>");
                self.render_children(tree, id, out);
                out.push_str("</p>\n");
            }
            NodeKind::Heading { level } => {
                out.push_str(&format!("<h{level}>"));
                self.render_children(tree, id, out);
                out.push_str(&format!("</h{level}>\n"));
            }
            NodeKind::BlockQuote => {
                out.push_str("<blockquote>\n");
                self.render_children(tree, id, out);
                out.push_str("</blockquote>\n");
            }
            NodeKind::ThematicBreak => out.push_str("<hr />\n"),
            NodeKind::FencedCodeBlock(code) => self.render_code_block(code, out),
            NodeKind::Text(text) => out.push_str(&encode_text(text)),
            NodeKind::Code(text) => {
                out.push_str("<code>");
                out.push_str(&encode_text(text));
                out.push_str("</code>");
            }
            NodeKind::SoftBreak => out.push_str(&self.options.soft_break),
            NodeKind::Emphasis { .. } => {
                out.push_str("<em>");
                self.render_children(tree, id, out);
                out.push_str("</em>");
            }
            NodeKind::StrongEmphasis { .. } => {
                out.push_str("<strong>");
                self.render_children(tree, id, out);
                out.push_str("</strong>");
            }
            NodeKind::Link { destination, title } => {
                out.push_str("<a href=\"");
                out.push_str(&encode_double_quoted_attribute(&encode_href(destination)));
                out.push('"');
                if let Some(title) = title {
                    out.push_str(" title=\"");
                    out.push_str(&encode_double_quoted_attribute(title));
                    out.push('"');
                }
                out.push('>');
                self.render_children(tree, id, out);
                out.push_str("</a>");
            }
        }
    }

    fn render_code_block(&self, code: &FencedCode, out: &mut String) {
        if self.options.suppress_comments && code.info == COMMENT_INFO {
            return;
        }
        out.push_str("<pre><code");
        if let Some(language) = code.info.split_whitespace().next() {
            out.push_str(" class=\"language-");
            out.push_str(&encode_double_quoted_attribute(language));
            out.push('"');
        }
        out.push('>');
        out.push_str(&encode_text(&code.literal));
        out.push_str("</code></pre>\n");
    }
}

pub fn encode_href(destination: &str) -> String {
    utf8_percent_encode(destination, HREF_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{ParseOptions, parse};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn html(text: &str, options: RenderOptions) -> String {
        let doc = parse(text, &ParseOptions::default());
        HtmlRenderer::new(options).render(&doc.tree)
    }

    #[rstest]
    #[case("wiki:Foo", "wiki:Foo")]
    #[case("wiki:Foo Bar", "wiki:Foo%20Bar")]
    #[case("https://x.org/a%20b?q=1&r=2", "https://x.org/a%20b?q=1&r=2")]
    #[case("wiki:Ünï", "wiki:%C3%9Cn%C3%AF")]
    fn href_encoding(#[case] destination: &str, #[case] expected: &str) {
        assert_eq!(encode_href(destination), expected);
    }

    #[test]
    fn ampersand_in_href_is_attribute_escaped() {
        assert_eq!(
            html("https://x.org/?a=1&b=2", RenderOptions::default()),
            "<p><a href=\"https://x.org/?a=1&amp;b=2\">https://x.org/?a=1&amp;b=2</a></p>\n"
        );
    }

    #[test]
    fn comment_blocks_can_be_kept() {
        let options = RenderOptions {
            suppress_comments: false,
            ..RenderOptions::default()
        };
        assert_eq!(
            html("{{{#!comment\nnote\n}}}", options),
            "<pre><code class=\"language-comment\">note\n</code></pre>\n"
        );
        assert_eq!(html("{{{#!comment\nnote\n}}}", RenderOptions::default()), "");
    }

    #[test]
    fn soft_break_is_configurable() {
        let options = RenderOptions {
            soft_break: "<br />\n".to_owned(),
            ..RenderOptions::default()
        };
        assert_eq!(html("a\nb", options), "<p>a<br />\nb</p>\n");
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(
            html("a <b> & c", RenderOptions::default()),
            "<p>a &lt;b&gt; &amp; c</p>\n"
        );
    }
}

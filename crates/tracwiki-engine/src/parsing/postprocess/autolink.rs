use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::tree::{NodeId, Tree};

use super::{
    PostProcessor, for_each_text_outside_links,
    split::{Fragment, fragments_around, split_text},
};

fn url_regex() -> &'static Regex {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s<>\[\]]+").expect("Invalid URL regex"))
}

/// Byte ranges of the URLs in `text`, trailing sentence punctuation excluded.
pub fn find_urls(text: &str) -> Vec<(usize, usize)> {
    url_regex()
        .find_iter(text)
        .filter_map(|m| {
            let url = m.as_str().trim_end_matches(['.', ',', ':', ';', '!', '?', ')', ']', '}']);
            let end = m.start() + url.len();
            // A scheme with nothing after it is not a link.
            (url.len() > url.find("://")? + 3).then_some((m.start(), end))
        })
        .collect()
}

/// Turns bare `http://` and `https://` URLs in text leaves into links.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlAutolinker;

impl UrlAutolinker {
    fn rewrite(tree: &mut Tree, node: NodeId) -> usize {
        let Some(literal) = tree.get(node).text() else {
            return 0;
        };
        let urls = find_urls(literal);
        if urls.is_empty() {
            return 0;
        }
        let fragments = fragments_around(
            literal.len(),
            urls.iter().map(|&(start, end)| {
                let url = literal[start..end].to_owned();
                let link = Fragment::Link {
                    destination: url.clone(),
                    display: url,
                    start,
                    end,
                };
                (start, end, link)
            }),
        );
        split_text(tree, node, fragments)
    }
}

impl PostProcessor for UrlAutolinker {
    fn name(&self) -> &'static str {
        "url autolink"
    }

    fn process(&self, tree: &mut Tree) -> usize {
        for_each_text_outside_links(tree, Self::rewrite)
    }
}

use serde::{Deserialize, Serialize};

/// Switches for the passes that run after the tree is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Turn bare `http://` / `https://` URLs into links.
    pub autolink_urls: bool,
    /// Turn `wiki:` and `ticket:` references into links.
    pub trac_links: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            autolink_urls: true,
            trac_links: true,
        }
    }
}

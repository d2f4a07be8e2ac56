//! # Rendering
//!
//! HTML output for a parsed [`Tree`](crate::parsing::Tree).

pub mod html;

use serde::{Deserialize, Serialize};

pub use html::HtmlRenderer;

/// Info string of code blocks that are notes to editors, never shown.
pub const COMMENT_INFO: &str = "comment";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Emitted for each soft line break.
    pub soft_break: String,
    /// Drop `{{{#!comment ... }}}` blocks from the output.
    pub suppress_comments: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            soft_break: "\n".to_owned(),
            suppress_comments: true,
        }
    }
}

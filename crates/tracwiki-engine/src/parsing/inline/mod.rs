//! # Inline Parsing
//!
//! Scanner-based inline parsing with a delimiter stack.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the raw
//! content of each inline-bearing leaf (paragraphs, headings) once the block
//! tree is complete.
//!
//! - Code spans are raw zones and suppress all other inline parsing inside them
//! - Runs of `'`, `*` and `_` are pushed on a delimiter stack and paired by the
//!   [`DelimiterProcessor`] registered for their character
//! - Every marker character is its own text node until pairing, so a processor
//!   can take two or three of them and leave the rest
//!
//! ## Modules
//!
//! - **`scanner`**: `Scanner` for character-by-character parsing across lines
//! - **`delimiter`**: `DelimiterRun` and the `DelimiterProcessor` contract
//! - **`kinds`**: inline constructs with owned delimiters (code span, emphasis)
//! - **`escape`**: backslash and entity unescaping
//! - **`parser`**: `parse_inlines()` main entry point

pub mod delimiter;
pub mod escape;
pub mod kinds;
pub mod parser;
pub mod scanner;

pub use delimiter::{DelimiterProcessor, DelimiterRun};
pub use parser::parse_inlines;
pub use scanner::{Position, Scanner};

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod indented_quote;
pub mod paragraph;
pub mod thematic_break;

pub use block_quote::BlockQuoteParser;
pub use code_fence::CodeFenceParser;
pub use heading::HeadingParser;
pub use indented_quote::IndentedQuoteParser;
pub use paragraph::ParagraphParser;
pub use thematic_break::ThematicBreak;

//! # Block Parsing
//!
//! Line-at-a-time block construction over a stack of open blocks.
//!
//! ## Parsing Phases
//!
//! 1. **Continuation**: every open block is asked, outermost first, whether the
//!    line continues it (`BlockContinue`). Containers consume their markers or
//!    indentation as they match.
//! 2. **Start**: where the chain breaks, recognizers are tried in registration
//!    order (`open::try_start`). A new container lets recognizers run again on
//!    what is left of the line.
//! 3. **Content**: the rest of the line goes to the innermost leaf, or opens a
//!    paragraph.
//!
//! ## Modules
//!
//! - **`state`**: `LineState`, the position/indent view of the current line
//! - **`types`**: the `BlockStart` / `BlockContinue` / `Resume` contract
//! - **`kinds`**: one recognizer per block kind, owning its own syntax
//! - **`parser`**: `BlockParser`, the closed set of open-block states
//! - **`open`**: registration order of the recognizers
//! - **`builder`**: `BlockBuilder`, the state machine driving all of the above
//!
//! ## Key Invariants
//!
//! - Code fences are raw zones: no block or inline parsing inside
//! - Every block records the source spans of the lines it consumed
//! - Inline content is handed out per leaf, in document order

pub mod builder;
pub mod kinds;
pub mod open;
pub mod parser;
pub mod state;
pub mod types;

pub use builder::{BlockBuilder, BlockTree, InlineContent};
pub use parser::BlockParser;
pub use state::LineState;
pub use types::{BlockContinue, BlockStart, Resume};

//! # Inline Kinds
//!
//! Inline constructs that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` TICK = '`' `` - raw zone that suppresses other parsing
//! - **`TracEmphasis`**: `MARKER = '\''` - `''em''` and `'''strong'''`
//! - **`CoreEmphasis`**: `*` and `_` emphasis
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod code_span;
pub mod emphasis;

pub use code_span::{CodeSpan, try_parse_code_span};
pub use emphasis::{CoreEmphasis, TracEmphasis, processor_for};

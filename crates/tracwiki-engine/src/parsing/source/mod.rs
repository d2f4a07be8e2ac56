//! # Source model
//!
//! Everything the parser emits can be traced back to the input:
//!
//! - **`span`**: [`Span`] (byte range), [`SourceSpan`] (line/column/input
//!   provenance) and [`SourceSpans`] (additive span list)
//! - **`line`**: [`SourceLine`] / [`SourceLines`], line content plus span
//! - **`lines`**: splits a rope into [`SourceLine`]s
//! - **`slice`**: maps spans back to text

pub mod line;
pub mod lines;
pub mod slice;
pub mod span;

pub use line::{SourceLine, SourceLines};
pub use lines::lines_with_spans;
pub use slice::{preview, slice_source};
pub use span::{SourceSpan, SourceSpans, Span};

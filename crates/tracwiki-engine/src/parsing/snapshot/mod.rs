//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`format`**: Renders a parsed tree as stable indented text (kinds,
//!   literals, source spans) for `insta` snapshots
//! - **`invariants`**: Runtime checks for parser correctness (tree links
//!   consistent, spans in bounds, text leaves slice back to their source)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is pinned by snapshots of the tree dump and of rendered
//! HTML rather than by a separate formal grammar.

pub mod format;
pub mod invariants;

pub use format::{format_spans, format_tree};
pub use invariants::check as invariants;

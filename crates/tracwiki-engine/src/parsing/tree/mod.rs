//! # Document tree
//!
//! The parsed document lives in an arena ([`Tree`]) of [`Node`]s addressed by
//! [`NodeId`]. Each node stores parent, first/last child and sibling indices,
//! so the splicing done by emphasis wrapping and link splitting is plain
//! index reassignment.

pub mod arena;
pub mod node;

pub use arena::{Children, Tree};
pub use node::{FencedCode, Node, NodeId, NodeKind};

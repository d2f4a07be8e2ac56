use xi_rope::Rope;

use crate::parsing::{
    source::slice_source,
    tree::{NodeKind, Tree},
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Parent, child and sibling links of every reachable node agree
/// - Every source span lies inside the rope
/// - A text leaf whose single span is as long as its literal slices back to it
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, tree: &Tree) {
    let n = rope.len();
    for id in tree.descendants(tree.root()) {
        let node = tree.get(id);

        let mut prev = None;
        for child in tree.children(id) {
            assert_eq!(tree.parent(child), Some(id), "parent link of {child:?}");
            assert_eq!(tree.get(child).prev(), prev, "prev link of {child:?}");
            prev = Some(child);
        }
        assert_eq!(node.last_child(), prev, "last child of {id:?}");

        for span in &node.source_spans {
            let range = span.input_range();
            assert!(
                range.end <= n,
                "span out of bounds: {span:?} on {id:?} (rope len: {n})"
            );
            assert!(
                slice_source(rope, *span).is_some(),
                "span not on char boundaries: {span:?} on {id:?}"
            );
        }

        if let NodeKind::Text(literal) = &node.kind {
            if let Some(span) = node.source_spans.single() {
                if span.length == literal.len() {
                    assert_eq!(
                        slice_source(rope, span).as_deref(),
                        Some(literal.as_str()),
                        "text {id:?} does not match its source"
                    );
                }
            }
        }
    }
}

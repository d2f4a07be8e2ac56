use crate::parsing::source::SourceSpans;

use super::node::{Node, NodeId, NodeKind};

/// Arena-backed document tree.
///
/// Nodes are never freed: `unlink` only detaches a node (and its subtree)
/// from its parent and siblings. Splicing is index reassignment.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    /// Creates a tree holding a single `Document` root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Document)],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes ever created, detached ones included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    /// Creates a detached node.
    pub fn create(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(kind));
        id
    }

    /// Creates a detached node carrying the given spans.
    pub fn create_with_spans(&mut self, kind: NodeKind, spans: SourceSpans) -> NodeId {
        let id = self.create(kind);
        self.nodes[id.0].source_spans = spans;
        id
    }

    pub fn set_source_spans(&mut self, id: NodeId, spans: SourceSpans) {
        self.nodes[id.0].source_spans = spans;
    }

    /// Appends `child` as the last child of `parent`, detaching it first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.unlink(child);
        let last = self.nodes[parent.0].last_child;
        {
            let c = &mut self.nodes[child.0];
            c.parent = Some(parent);
            c.prev = last;
        }
        match last {
            Some(last) => self.nodes[last.0].next = Some(child),
            None => self.nodes[parent.0].first_child = Some(child),
        }
        self.nodes[parent.0].last_child = Some(child);
    }

    /// Inserts `node` directly after `anchor`, detaching it first.
    pub fn insert_after(&mut self, anchor: NodeId, node: NodeId) {
        self.unlink(node);
        let next = self.nodes[anchor.0].next;
        let parent = self.nodes[anchor.0].parent;
        {
            let n = &mut self.nodes[node.0];
            n.next = next;
            n.prev = Some(anchor);
            n.parent = parent;
        }
        self.nodes[anchor.0].next = Some(node);
        match next {
            Some(next) => self.nodes[next.0].prev = Some(node),
            None => {
                if let Some(parent) = parent {
                    self.nodes[parent.0].last_child = Some(node);
                }
            }
        }
    }

    /// Detaches `id` from its parent and siblings. Its children stay attached to it.
    pub fn unlink(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let n = &self.nodes[id.0];
            (n.parent, n.prev, n.next)
        };
        match prev {
            Some(prev) => self.nodes[prev.0].next = next,
            None => {
                if let Some(parent) = parent {
                    self.nodes[parent.0].first_child = next;
                }
            }
        }
        match next {
            Some(next) => self.nodes[next.0].prev = prev,
            None => {
                if let Some(parent) = parent {
                    self.nodes[parent.0].last_child = prev;
                }
            }
        }
        let n = &mut self.nodes[id.0];
        n.parent = None;
        n.prev = None;
        n.next = None;
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].first_child
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].next
    }

    /// Direct children of `id`, in order.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.nodes[id.0].first_child,
        }
    }

    /// Siblings strictly between `start` and `end`.
    ///
    /// Collected eagerly so the caller can re-parent them.
    pub fn between(&self, start: NodeId, end: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut cur = self.nodes[start.0].next;
        while let Some(id) = cur {
            if id == end {
                break;
            }
            out.push(id);
            cur = self.nodes[id.0].next;
        }
        out
    }

    /// All nodes reachable from `id` in pre-order, `id` included.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            out.push(cur);
            let children: Vec<_> = self.children(cur).collect();
            stack.extend(children.into_iter().rev());
        }
        out
    }

    /// Concatenated text of all `Text` and `Code` descendants of `id`.
    pub fn literal_text(&self, id: NodeId) -> String {
        let mut out = String::new();
        for n in self.descendants(id) {
            match &self.nodes[n.0].kind {
                NodeKind::Text(s) | NodeKind::Code(s) => out.push_str(s),
                NodeKind::SoftBreak => out.push('\n'),
                _ => {}
            }
        }
        out
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Children<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.tree.nodes[id.0].next;
        Some(id)
    }
}

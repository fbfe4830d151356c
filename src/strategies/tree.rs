//! Arena-backed tree of reasoning attempts.
//!
//! Nodes live in a flat `Vec` owned by the tree; parent and child links are
//! integer indices, so there are no reference cycles and no shared ownership.
//! Ids are handed out in creation order and are never invalidated: nodes are
//! appended during expansion and never removed or merged.

use serde::Serialize;

/// Separator used when joining a branch's history into a display string.
pub const HISTORY_SEPARATOR: &str = " -> ";

/// Index of a node within a [`ThoughtTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(usize);

/// One reasoning attempt: the raw completion text for this branch, or the
/// original question for the root.
#[derive(Debug, Clone)]
struct ThoughtNode {
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Tree of reasoning attempts, rooted at the original question.
#[derive(Debug, Clone)]
pub struct ThoughtTree {
    nodes: Vec<ThoughtNode>,
}

impl ThoughtTree {
    /// Create a tree holding only the root node.
    pub fn new(root_text: impl Into<String>) -> Self {
        Self {
            nodes: vec![ThoughtNode {
                text: root_text.into(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The root node id.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a child under `parent` and return its id.
    ///
    /// Children keep their generation order within the parent's child list.
    pub fn add_child(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ThoughtNode {
            text: text.into(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// The raw text of a node.
    pub fn text(&self, id: NodeId) -> &str {
        &self.nodes[id.0].text
    }

    /// The parent of a node, `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// The ordered children of a node.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Total number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes. Always false: the root exists from
    /// construction.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth of a node; the root has depth 0.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Reconstruct the full ancestor history of a node as a display string,
    /// reading root-to-node, joined with [`HISTORY_SEPARATOR`].
    pub fn history(&self, id: NodeId) -> String {
        let mut texts = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current {
            texts.push(self.nodes[node.0].text.as_str());
            current = self.nodes[node.0].parent;
        }
        texts.reverse();
        texts.join(HISTORY_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree_holds_only_root() {
        let tree = ThoughtTree::new("2+2?");
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.text(tree.root()), "2+2?");
        assert_eq!(tree.parent(tree.root()), None);
        assert!(tree.children(tree.root()).is_empty());
    }

    #[test]
    fn test_add_child_links_both_directions() {
        let mut tree = ThoughtTree::new("q");
        let root = tree.root();
        let a = tree.add_child(root, "attempt a");
        let b = tree.add_child(root, "attempt b");

        assert_eq!(tree.parent(a), Some(root));
        assert_eq!(tree.parent(b), Some(root));
        assert_eq!(tree.children(root), &[a, b]);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_children_keep_generation_order() {
        let mut tree = ThoughtTree::new("q");
        let root = tree.root();
        let ids: Vec<NodeId> = (0..5)
            .map(|i| tree.add_child(root, format!("attempt {}", i)))
            .collect();
        assert_eq!(tree.children(root), ids.as_slice());
    }

    #[test]
    fn test_history_of_root_is_its_own_text() {
        let tree = ThoughtTree::new("2+2?");
        assert_eq!(tree.history(tree.root()), "2+2?");
    }

    #[test]
    fn test_history_reads_root_to_node() {
        let mut tree = ThoughtTree::new("q");
        let a = tree.add_child(tree.root(), "first");
        let b = tree.add_child(a, "second");

        assert_eq!(tree.history(b), "q -> first -> second");
    }

    #[test]
    fn test_history_length_matches_depth() {
        let mut tree = ThoughtTree::new("root");
        let mut node = tree.root();
        for i in 0..4 {
            node = tree.add_child(node, format!("level {}", i));
        }

        assert_eq!(tree.depth(node), 4);
        let history = tree.history(node);
        assert_eq!(history.split(HISTORY_SEPARATOR).count(), 5);
    }

    #[test]
    fn test_depth_of_root_is_zero() {
        let tree = ThoughtTree::new("q");
        assert_eq!(tree.depth(tree.root()), 0);
    }
}

//! Arena-backed document tree.
//!
//! Nodes are addressed by stable [`NodeId`] indices rather than references,
//! so content fragments can change owners (draft slot → normalized slot →
//! rendered panel) as id moves, never as subtree copies.

use crate::group::{DetailsMeta, GroupMeta, SlotMeta};

/// Stable handle to a node in a [`Document`].
///
/// Ids are indices into the document's arena and remain valid for the
/// lifetime of the document, including across [`Document::replace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Index of this node in the arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a node holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The document root. Exactly one per document.
    Root,
    /// A run of raw markdown lines, rendered at serialization time.
    Markdown(String),
    /// Already-rendered output: a resolved group or an error marker.
    Html(String),
    /// A draft filter group awaiting normalization.
    Group(GroupMeta),
    /// A draft slot within a group.
    Slot(SlotMeta),
    /// A draft collapsible block awaiting resolution.
    Details(DetailsMeta),
}

/// One node in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Parent node, `None` for the root and for detached nodes.
    pub parent: Option<NodeId>,
    /// Children in document order.
    pub children: Vec<NodeId>,
    /// Node payload.
    pub kind: NodeKind,
}

/// Arena-backed document tree.
///
/// # Example
///
/// ```
/// use ftabs_model::{Document, NodeKind};
///
/// let mut doc = Document::new();
/// let root = doc.root();
/// let para = doc.push(NodeKind::Markdown("Hello.".to_owned()), root);
/// assert_eq!(doc.children(root), [para]);
/// ```
#[derive(Debug, Default)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Create a document containing only a root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                kind: NodeKind::Root,
            }],
        }
    }

    /// The root node id.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a new node as the last child of `parent`.
    pub fn push(&mut self, kind: NodeKind, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            kind,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// The node's payload.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    /// Mutable access to the node's payload.
    pub fn kind_mut(&mut self, id: NodeId) -> &mut NodeKind {
        &mut self.nodes[id.0].kind
    }

    /// The node's children in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// The node's parent, if attached.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Detach and return all children of `id`, transferring ownership to the
    /// caller. The detached nodes stay addressable through their ids; their
    /// parent link is cleared so they no longer belong to the tree.
    pub fn take_children(&mut self, id: NodeId) -> Vec<NodeId> {
        let children = std::mem::take(&mut self.nodes[id.0].children);
        for &child in &children {
            self.nodes[child.0].parent = None;
        }
        children
    }

    /// Replace the node's payload in place, severing its child links.
    ///
    /// The parent's child list keeps the same id, so the node's position in
    /// document order is unchanged. Any children the node still owned are
    /// detached, not copied.
    pub fn replace(&mut self, id: NodeId, kind: NodeKind) {
        self.take_children(id);
        self.nodes[id.0].kind = kind;
    }

    /// Total number of nodes ever allocated, including detached ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the document holds nothing but the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_document_has_root_only() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.kind(doc.root()), &NodeKind::Root);
        assert!(doc.children(doc.root()).is_empty());
    }

    #[test]
    fn test_push_preserves_document_order() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = doc.push(NodeKind::Markdown("a".to_owned()), root);
        let b = doc.push(NodeKind::Markdown("b".to_owned()), root);
        let c = doc.push(NodeKind::Markdown("c".to_owned()), root);

        assert_eq!(doc.children(root), [a, b, c]);
        assert_eq!(doc.parent(b), Some(root));
    }

    #[test]
    fn test_take_children_moves_ownership() {
        let mut doc = Document::new();
        let root = doc.root();
        let slot = doc.push(NodeKind::Markdown("slot".to_owned()), root);
        let body = doc.push(NodeKind::Markdown("body".to_owned()), slot);

        let taken = doc.take_children(slot);
        assert_eq!(taken, vec![body]);
        assert!(doc.children(slot).is_empty());
        assert_eq!(doc.parent(body), None);
        // Content is still addressable through the moved id.
        assert_eq!(doc.kind(body), &NodeKind::Markdown("body".to_owned()));
    }

    #[test]
    fn test_replace_keeps_position_among_siblings() {
        let mut doc = Document::new();
        let root = doc.root();
        let before = doc.push(NodeKind::Markdown("before".to_owned()), root);
        let target = doc.push(NodeKind::Markdown("target".to_owned()), root);
        let after = doc.push(NodeKind::Markdown("after".to_owned()), root);
        let child = doc.push(NodeKind::Markdown("child".to_owned()), target);

        doc.replace(target, NodeKind::Html("<div/>".to_owned()));

        assert_eq!(doc.children(root), [before, target, after]);
        assert_eq!(doc.kind(target), &NodeKind::Html("<div/>".to_owned()));
        assert!(doc.children(target).is_empty());
        assert_eq!(doc.parent(child), None);
    }
}

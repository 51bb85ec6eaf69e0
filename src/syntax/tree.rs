//! The YAML node tree.
//!
//! Nodes live in one arena owned by [`YamlTree`] and are allocated in
//! pre-order, so a node's descendants always occupy the id range directly
//! after it. [`YamlNode`] is a cheap `Copy` handle that borrows the tree and
//! gives parent/child navigation.

use std::fmt;

use text_size::{TextRange, TextSize};

/// Index of a node inside its [`YamlTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(super) fn new(raw: usize) -> Self {
        Self(raw as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What kind of YAML value a node holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeShape {
    /// A scalar (or `null`). Has no children.
    Scalar,
    /// A mapping. Children are keyed by name.
    Mapping,
    /// A sequence. Children are unnamed and ordered.
    Sequence,
}

#[derive(Debug, Clone)]
struct NodeData {
    name: Option<String>,
    value: Option<String>,
    shape: NodeShape,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Position among siblings.
    index: usize,
    /// One past the id of the last descendant.
    subtree_end: usize,
    range: TextRange,
}

/// An immutable, ordered tree decoded from one YAML document.
///
/// Only the decoder builds trees, and it always allocates the root first, so
/// a tree has at least one node.
#[derive(Debug, Clone)]
pub struct YamlTree {
    nodes: Vec<NodeData>,
}

impl YamlTree {
    /// A tree with no nodes yet. The decoder allocates the root next.
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// The document root. Its name is `None`.
    pub fn root(&self) -> YamlNode<'_> {
        self.node(NodeId(0))
    }

    pub fn node(&self, id: NodeId) -> YamlNode<'_> {
        YamlNode { tree: self, id }
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in pre-order.
    pub fn nodes(&self) -> impl Iterator<Item = YamlNode<'_>> {
        (0..self.nodes.len()).map(|i| self.node(NodeId::new(i)))
    }

    /// The deepest node whose span contains `offset`.
    ///
    /// Spans run from a node's anchor to the anchor of the next node that is
    /// not its descendant, so this is the last node in pre-order that starts
    /// at or before the offset.
    pub fn node_at_offset(&self, offset: TextSize) -> YamlNode<'_> {
        let id = self
            .nodes
            .iter()
            .rposition(|node| node.range.start() <= offset)
            .unwrap_or(0);
        self.node(NodeId::new(id))
    }

    // ------------------------------------------------------------------
    // Construction (decode/locate only)
    // ------------------------------------------------------------------

    pub(super) fn alloc(
        &mut self,
        parent: Option<NodeId>,
        name: Option<String>,
        value: Option<String>,
        shape: NodeShape,
        index: usize,
    ) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(NodeData {
            name,
            value,
            shape,
            parent,
            children: Vec::new(),
            index,
            subtree_end: id.index() + 1,
            range: TextRange::default(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        id
    }

    /// Mark the end of `id`'s subtree once all its descendants are allocated.
    pub(super) fn close(&mut self, id: NodeId) {
        self.nodes[id.index()].subtree_end = self.nodes.len();
    }

    pub(super) fn subtree_end(&self, id: NodeId) -> usize {
        self.nodes[id.index()].subtree_end
    }

    pub(super) fn set_range(&mut self, id: NodeId, range: TextRange) {
        self.nodes[id.index()].range = range;
    }
}

/// A borrowed handle to one node of a [`YamlTree`].
#[derive(Clone, Copy)]
pub struct YamlNode<'a> {
    tree: &'a YamlTree,
    id: NodeId,
}

impl<'a> YamlNode<'a> {
    fn data(&self) -> &'a NodeData {
        &self.tree.nodes[self.id.index()]
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'a YamlTree {
        self.tree
    }

    /// Mapping key, `None` for sequence items and the root.
    pub fn name(&self) -> Option<&'a str> {
        self.data().name.as_deref()
    }

    /// Scalar text, `None` for containers and `null`.
    pub fn value(&self) -> Option<&'a str> {
        self.data().value.as_deref()
    }

    pub fn shape(&self) -> NodeShape {
        self.data().shape
    }

    /// Position among siblings (0-based).
    pub fn index(&self) -> usize {
        self.data().index
    }

    /// Source span of the node.
    pub fn range(&self) -> TextRange {
        self.data().range
    }

    pub fn is_root(&self) -> bool {
        self.id.index() == 0
    }

    pub fn parent(&self) -> Option<YamlNode<'a>> {
        self.data().parent.map(|id| self.tree.node(id))
    }

    pub fn children(self) -> impl Iterator<Item = YamlNode<'a>> {
        let tree = self.tree;
        self.data().children.iter().map(move |id| tree.node(*id))
    }

    pub fn child_count(&self) -> usize {
        self.data().children.len()
    }

    /// First child with the given key.
    pub fn child(&self, name: &str) -> Option<YamlNode<'a>> {
        self.children().find(|child| child.has_name(name))
    }

    pub fn child_at(&self, index: usize) -> Option<YamlNode<'a>> {
        self.data()
            .children
            .get(index)
            .map(|id| self.tree.node(*id))
    }

    /// Scalar value of the child with the given key.
    pub fn child_value(&self, name: &str) -> Option<&'a str> {
        self.child(name).and_then(|child| child.value())
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name() == Some(name)
    }

    pub fn has_parent(&self, name: &str) -> bool {
        self.parent().is_some_and(|parent| parent.has_name(name))
    }

    /// Parent, grandparent, … up to and including the root.
    pub fn ancestors(self) -> impl Iterator<Item = YamlNode<'a>> {
        std::iter::successors(self.parent(), |node| node.parent())
    }

    /// This node followed by its ancestors.
    pub fn ancestors_with_self(self) -> impl Iterator<Item = YamlNode<'a>> {
        std::iter::successors(Some(self), |node| node.parent())
    }

    /// Whether `other` is this node or one of its descendants.
    pub fn contains(&self, other: YamlNode<'_>) -> bool {
        std::ptr::eq(self.tree, other.tree)
            && self.id <= other.id
            && other.id.index() < self.tree.subtree_end(self.id)
    }

    /// Keys from the root down to this node; sequence items contribute `None`.
    pub fn path(&self) -> Vec<Option<&'a str>> {
        let mut path: Vec<_> = self
            .ancestors_with_self()
            .filter(|node| !node.is_root())
            .map(|node| node.name())
            .collect();
        path.reverse();
        path
    }

    /// All nodes in this subtree (self included) matching `predicate`, in
    /// pre-order.
    pub fn collect_where<F>(&self, mut predicate: F) -> Vec<YamlNode<'a>>
    where
        F: FnMut(&YamlNode<'a>) -> bool,
    {
        let tree = self.tree;
        (self.id.index()..tree.subtree_end(self.id))
            .map(|i| tree.node(NodeId::new(i)))
            .filter(|node| predicate(node))
            .collect()
    }
}

/// Structural equality across parse passes.
///
/// Names and children must match exactly. Values match when equal, or when
/// both are non-empty and one is a prefix of the other, so a scalar that is
/// still being typed matches the same scalar in a later, fuller parse.
impl PartialEq for YamlNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self.tree, other.tree) && self.id == other.id {
            return true;
        }
        self.name() == other.name()
            && values_match(self.value(), other.value())
            && self.child_count() == other.child_count()
            && self.children().zip(other.children()).all(|(a, b)| a == b)
    }
}

fn values_match(left: Option<&str>, right: Option<&str>) -> bool {
    match (left, right) {
        (Some(a), Some(b)) if a == b => true,
        (Some(a), Some(b)) => {
            !a.is_empty() && !b.is_empty() && (a.starts_with(b) || b.starts_with(a))
        }
        (None, None) => true,
        _ => false,
    }
}

impl fmt::Debug for YamlNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YamlNode")
            .field("name", &self.name())
            .field("value", &self.value())
            .field("children", &self.child_count())
            .field("range", &self.range())
            .finish()
    }
}

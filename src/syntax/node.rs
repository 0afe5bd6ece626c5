use std::fmt;

use crate::base::DocumentLine;

/// A `name=value` pair attached to a node.
///
/// Both parts are already unquoted when captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IonAttribute {
    pub name: String,
    pub value: String,
}

impl IonAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Index of a node inside its [`NodeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// One parsed element of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IonNode {
    pub name: String,
    /// Nesting depth: leading tabs plus the active indentation offset
    pub level: usize,
    pub document_line: DocumentLine,
    pub is_root: bool,
    pub attributes: Vec<IonAttribute>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl IonNode {
    pub fn new(
        name: impl Into<String>,
        level: usize,
        document_line: DocumentLine,
        is_root: bool,
        attributes: Vec<IonAttribute>,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            document_line,
            is_root,
            attributes,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Arena holding every node of one parsed document.
///
/// Nodes are stored in document order; the root is always the first node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeTree {
    nodes: Vec<IonNode>,
}

impl NodeTree {
    /// Wrap an ordered, non-empty flat node list. Linking is done with
    /// [`NodeTree::attach`].
    pub(crate) fn from_flat(nodes: Vec<IonNode>) -> Self {
        debug_assert!(!nodes.is_empty(), "a node tree needs at least a root");
        Self { nodes }
    }

    pub(crate) fn attach(&mut self, child: NodeId, parent: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = NodeId> + use<> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub(crate) fn node(&self, id: NodeId) -> &IonNode {
        &self.nodes[id.0]
    }

    pub fn root(&self) -> NodeRef<'_> {
        self.get(NodeId(0))
    }

    pub fn get(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { tree: self, id }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in document order
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.ids().map(|id| self.get(id))
    }
}

/// Borrowed view of a node with access to its relatives.
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t NodeTree,
    id: NodeId,
}

impl<'t> NodeRef<'t> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn node(&self) -> &'t IonNode {
        self.tree.node(self.id)
    }

    pub fn name(&self) -> &'t str {
        &self.node().name
    }

    pub fn level(&self) -> usize {
        self.node().level
    }

    pub fn document_line(&self) -> DocumentLine {
        self.node().document_line
    }

    pub fn is_root(&self) -> bool {
        self.node().is_root
    }

    pub fn attributes(&self) -> &'t [IonAttribute] {
        &self.node().attributes
    }

    /// Value of the first attribute with the given name
    pub fn attribute(&self, name: &str) -> Option<&'t str> {
        self.attributes()
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn parent(&self) -> Option<NodeRef<'t>> {
        self.node().parent.map(|id| self.tree.get(id))
    }

    /// Children in document order
    pub fn children(self) -> impl Iterator<Item = NodeRef<'t>> {
        let tree = self.tree;
        self.node().children.iter().map(move |&id| tree.get(id))
    }

    pub fn child_count(&self) -> usize {
        self.node().children.len()
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("level", &self.level())
            .finish()
    }
}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parent = self.parent().map(|p| p.name()).unwrap_or("none");
        write!(
            f,
            "{}: parent={}, children={}",
            self.name(),
            parent,
            self.child_count()
        )
    }
}

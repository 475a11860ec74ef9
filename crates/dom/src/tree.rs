//! DOM tree operations.
//!
//! The [`Dom`] struct owns every node of a page and provides the tree
//! mutations and queries that page behaviors need. Operations on an unknown
//! `NodeId` are no-ops (or return `None` / `false`).

use crate::node::{Attr, ElementData, Node, NodeData, NodeId};

// ---------------------------------------------------------------------------
// Dom
// ---------------------------------------------------------------------------

/// The complete DOM tree of one page.
#[derive(Clone, Debug)]
pub struct Dom {
    nodes: Vec<Node>,
    document: NodeId,
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom {
    /// Create a DOM holding only the document node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Document)],
            document: NodeId(0),
        }
    }

    /// The document node (root of the tree, also the target of window events).
    pub fn document(&self) -> NodeId {
        self.document
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.node(id).and_then(Node::as_element)
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.nodes.get_mut(id.index()).and_then(Node::as_element_mut)
    }

    // =======================================================================
    // Node creation
    // =======================================================================

    fn allocate(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element node.
    pub fn create_element(&mut self, tag_name: &str, attrs: Vec<Attr>) -> NodeId {
        self.allocate(Node::new(NodeData::Element(ElementData::new(
            tag_name, attrs,
        ))))
    }

    /// Convenience: create an element with no attributes.
    pub fn create_html_element(&mut self, tag_name: &str) -> NodeId {
        self.create_element(tag_name, Vec::new())
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, data: &str) -> NodeId {
        self.allocate(Node::new(NodeData::Text {
            data: data.to_string(),
        }))
    }

    // =======================================================================
    // Tree mutation
    // =======================================================================

    /// Append `child` as the last child of `parent`.
    ///
    /// If `child` already has a parent it is first removed from there.
    /// Appending a node under itself or one of its descendants is refused.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.node(parent).is_none() || self.node(child).is_none() {
            return;
        }
        if self.contains(child, parent) {
            return;
        }
        self.detach(child);
        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
    }

    /// Detach a node from its parent. The node stays allocated.
    pub fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.node(node).and_then(|n| n.parent) else {
            return;
        };
        self.nodes[parent.index()].children.retain(|&c| c != node);
        self.nodes[node.index()].parent = None;
    }

    /// Replace all children of `node` with a single text node.
    pub fn set_text_content(&mut self, node: NodeId, text: &str) {
        if self.node(node).is_none() {
            return;
        }
        for child in self.children(node) {
            self.detach(child);
        }
        let text_node = self.create_text(text);
        self.append_child(node, text_node);
    }

    // =======================================================================
    // Attributes and classes
    // =======================================================================

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).and_then(|e| e.attr(name))
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(elem) = self.element_mut(node) {
            elem.set_attr(name, value);
        }
    }

    /// Remove attribute `name`. Returns `true` if it was present.
    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> bool {
        self.element_mut(node)
            .map(|e| e.remove_attr(name))
            .unwrap_or(false)
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|e| e.has_class(class))
    }

    /// Add or remove `class` so that its presence equals `present`.
    /// Returns `true` if the class list changed.
    pub fn set_class(&mut self, node: NodeId, class: &str, present: bool) -> bool {
        match self.element_mut(node) {
            Some(elem) if present => elem.add_class(class),
            Some(elem) => elem.remove_class(class),
            None => false,
        }
    }

    // =======================================================================
    // Traversal
    // =======================================================================

    /// Immediate children of `parent` in document order.
    pub fn children(&self, parent: NodeId) -> Vec<NodeId> {
        self.node(parent)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    /// Chain of ancestors from `node` up to (and including) the root.
    /// The first element is the direct parent, the last is the root.
    pub fn ancestors(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut cursor = self.node(node).and_then(|n| n.parent);
        while let Some(id) = cursor {
            out.push(id);
            cursor = self.node(id).and_then(|n| n.parent);
        }
        out
    }

    /// All descendants of `node` in pre-order DFS (not including `node`).
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).into_iter().rev().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).into_iter().rev());
        }
        out
    }

    /// `true` if `other` is `container` itself or one of its descendants.
    pub fn contains(&self, container: NodeId, other: NodeId) -> bool {
        if self.node(container).is_none() || self.node(other).is_none() {
            return false;
        }
        other == container || self.ancestors(other).contains(&container)
    }

    /// The closest inclusive ancestor of `node` that is an element matching
    /// `pred`.
    pub fn closest<F>(&self, node: NodeId, pred: F) -> Option<NodeId>
    where
        F: Fn(&ElementData) -> bool,
    {
        std::iter::once(node)
            .chain(self.ancestors(node))
            .find(|&id| self.element(id).is_some_and(&pred))
    }

    /// Concatenated text of all text descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        for id in std::iter::once(node).chain(self.descendants(node)) {
            if let Some(NodeData::Text { data }) = self.node(id).map(|n| &n.data) {
                out.push_str(data);
            }
        }
        out
    }

    // =======================================================================
    // Queries
    // =======================================================================

    /// First element in the document tree with the given `id` attribute
    /// (pre-order DFS). Detached nodes are not found.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.document)
            .into_iter()
            .find(|&n| self.element(n).and_then(ElementData::id) == Some(id))
    }

    /// Elements in the subtree rooted at `root` (inclusive) matching `pred`,
    /// in document order.
    pub fn select<F>(&self, root: NodeId, pred: F) -> Vec<NodeId>
    where
        F: Fn(&ElementData) -> bool,
    {
        std::iter::once(root)
            .chain(self.descendants(root))
            .filter(|&id| self.element(id).is_some_and(&pred))
            .collect()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

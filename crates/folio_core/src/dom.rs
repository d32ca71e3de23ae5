//! In-memory element tree standing in for the host page DOM.
//!
//! # Responsibility
//! - Model the excluded static-markup collaborator at its interface:
//!   elements addressable by tag, attribute markers, classes and text.
//! - Support full-subtree rebuilds (clear container, append fresh cards).
//!
//! # Invariants
//! - Node ids stay valid for the document's lifetime; detached subtrees
//!   are simply unreachable from the root and excluded from queries.
//! - Queries walk the tree in document (preorder) order.

use std::collections::{BTreeMap, BTreeSet};

/// Handle to one element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct Node {
    tag: String,
    attrs: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    text: String,
    children: Vec<NodeId>,
}

/// Arena-backed element tree.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// Creates a document with a single root element of the given tag.
    pub fn new(root_tag: impl Into<String>) -> Self {
        let root_node = Node {
            tag: root_tag.into(),
            ..Node::default()
        };
        Self {
            nodes: vec![root_node],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Creates a detached element; attach it with [`Document::append_child`].
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            tag: tag.into(),
            ..Node::default()
        });
        id
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
    }

    /// Detaches every child of `parent`. Detached subtrees are not reused.
    pub fn clear_children(&mut self, parent: NodeId) {
        self.nodes[parent.0].children.clear();
    }

    pub fn children(&self, parent: NodeId) -> &[NodeId] {
        &self.nodes[parent.0].children
    }

    pub fn tag(&self, id: NodeId) -> &str {
        &self.nodes[id.0].tag
    }

    pub fn text(&self, id: NodeId) -> &str {
        &self.nodes[id.0].text
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        self.nodes[id.0].text = text.into();
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes[id.0].attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, id: NodeId, name: impl Into<String>, value: impl Into<String>) {
        self.nodes[id.0].attrs.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        self.nodes[id.0].attrs.remove(name);
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes[id.0].classes.contains(class)
    }

    pub fn add_class(&mut self, id: NodeId, class: impl Into<String>) {
        self.nodes[id.0].classes.insert(class.into());
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        self.nodes[id.0].classes.remove(class);
    }

    /// Adds or removes `class` so its presence equals `enabled`.
    pub fn set_class_enabled(&mut self, id: NodeId, class: &str, enabled: bool) {
        if enabled {
            self.add_class(id, class);
        } else {
            self.remove_class(id, class);
        }
    }

    /// All elements reachable from the root, preorder.
    pub fn all_nodes(&self) -> Vec<NodeId> {
        self.descendants_inclusive(self.root)
    }

    /// `scope` followed by its descendants, preorder.
    fn descendants_inclusive(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![scope];
        while let Some(id) = stack.pop() {
            out.push(id);
            for child in self.nodes[id.0].children.iter().rev() {
                stack.push(*child);
            }
        }
        out
    }

    /// First element in document order with `attrs[name] == value`.
    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<NodeId> {
        self.all_nodes()
            .into_iter()
            .find(|id| self.attr(*id, name) == Some(value))
    }

    /// Every element in document order with `attrs[name] == value`.
    pub fn find_all_by_attr(&self, name: &str, value: &str) -> Vec<NodeId> {
        self.all_nodes()
            .into_iter()
            .filter(|id| self.attr(*id, name) == Some(value))
            .collect()
    }

    /// Every element in document order carrying the attribute at all.
    pub fn find_all_with_attr(&self, name: &str) -> Vec<NodeId> {
        self.all_nodes()
            .into_iter()
            .filter(|id| self.attr(*id, name).is_some())
            .collect()
    }

    /// First strict descendant of `scope` with `attrs[name] == value`.
    ///
    /// Mirrors `querySelector` semantics: the scope element itself never
    /// matches.
    pub fn find_in(&self, scope: NodeId, name: &str, value: &str) -> Option<NodeId> {
        self.descendants_inclusive(scope)
            .into_iter()
            .skip(1)
            .find(|id| self.attr(*id, name) == Some(value))
    }

    /// Every strict descendant of `scope` carrying the attribute.
    pub fn find_all_with_attr_in(&self, scope: NodeId, name: &str) -> Vec<NodeId> {
        self.descendants_inclusive(scope)
            .into_iter()
            .skip(1)
            .filter(|id| self.attr(*id, name).is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Document;

    #[test]
    fn cleared_children_disappear_from_queries() {
        let mut doc = Document::new("body");
        let container = doc.create_element("div");
        doc.set_attr(container, "data-list", "education");
        doc.append_child(doc.root(), container);

        let card = doc.create_element("div");
        doc.set_attr(card, "data-id", "edu-1");
        doc.append_child(container, card);
        assert!(doc.find_by_attr("data-id", "edu-1").is_some());

        doc.clear_children(container);
        assert!(doc.find_by_attr("data-id", "edu-1").is_none());
    }

    #[test]
    fn find_in_excludes_the_scope_element() {
        let mut doc = Document::new("body");
        let card = doc.create_element("div");
        doc.set_attr(card, "data-field", "outer");
        doc.append_child(doc.root(), card);

        let field = doc.create_element("p");
        doc.set_attr(field, "data-field", "outer");
        doc.append_child(card, field);

        assert_eq!(doc.find_in(card, "data-field", "outer"), Some(field));
    }

    #[test]
    fn queries_walk_in_document_order() {
        let mut doc = Document::new("body");
        let first = doc.create_element("p");
        let second = doc.create_element("p");
        doc.set_attr(first, "data-key", "a");
        doc.set_attr(second, "data-key", "b");
        doc.append_child(doc.root(), first);
        doc.append_child(doc.root(), second);

        assert_eq!(doc.find_all_with_attr("data-key"), vec![first, second]);
    }
}

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use floating_size::{ElementTree, StyleProperty, StyleValue};

/// Handle to an element in a [`MemoryDom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, Default)]
struct Node {
    classes: Vec<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    style: BTreeMap<StyleProperty, StyleValue>,
}

/// A minimal in-memory element tree.
///
/// Useful for tests, headless rendering, and as a template for real DOM bindings. Elements are
/// created detached; they become connected once appended under [`MemoryDom::document`].
#[derive(Clone, Debug)]
pub struct MemoryDom {
    nodes: Vec<Node>,
    style_mutations: usize,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    pub fn new() -> Self {
        Self {
            nodes: alloc::vec![Node::default()],
            style_mutations: 0,
        }
    }

    /// The root every connected element descends from.
    pub fn document(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn create_element<I, S>(&mut self, classes: I) -> NodeId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes.push(Node {
            classes: classes.into_iter().map(Into::into).collect(),
            ..Node::default()
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Moves `child` under `parent`, after its existing children.
    ///
    /// Returns `false` (and changes nothing) for unknown ids or when `child` is `parent` or one of
    /// its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.node(parent).is_none() || self.node(child).is_none() || child == self.document() {
            return false;
        }
        if parent == child || self.is_ancestor(child, parent) {
            return false;
        }
        self.unlink(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        true
    }

    /// Removes `node` (and its subtree) from its parent. Unknown ids are ignored.
    pub fn detach(&mut self, node: NodeId) {
        if node == self.document() || self.node(node).is_none() {
            return;
        }
        self.unlink(node);
        atrace!(node = node.0, "detached");
    }

    pub fn add_class(&mut self, node: NodeId, class: impl Into<String>) {
        let class = class.into();
        if let Some(n) = self.nodes.get_mut(node.0) {
            if !n.classes.contains(&class) {
                n.classes.push(class);
            }
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.node(node)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Number of inline style changes applied so far.
    pub fn style_mutations(&self) -> usize {
        self.style_mutations
    }

    /// Inline style in CSS text form, e.g. `max-height: 343px; overflow: auto`.
    pub fn style_text(&self, node: NodeId) -> String {
        let mut out = String::new();
        let Some(n) = self.node(node) else {
            return out;
        };
        for (property, value) in &n.style {
            if !out.is_empty() {
                out.push_str("; ");
            }
            let _ = write!(out, "{property}: {value}");
        }
        out
    }

    fn node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node.0)
    }

    fn unlink(&mut self, node: NodeId) {
        let Some(parent) = self.nodes.get_mut(node.0).and_then(|n| n.parent.take()) else {
            return;
        };
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.retain(|&c| c != node);
        }
    }

    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cur = self.parent(node);
        while let Some(p) = cur {
            if p == ancestor {
                return true;
            }
            cur = self.parent(p);
        }
        false
    }
}

impl ElementTree for MemoryDom {
    type Handle = NodeId;

    fn query_class(&self, root: &NodeId, class: &str) -> Option<NodeId> {
        // Pre-order, children pushed in reverse so the first child is visited first.
        let mut stack: Vec<NodeId> = self.children(*root).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if self.has_class(id, class) {
                return Some(id);
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        None
    }

    fn style(&self, element: &NodeId, property: StyleProperty) -> Option<StyleValue> {
        self.node(*element)?.style.get(&property).copied()
    }

    fn set_style(&mut self, element: &NodeId, property: StyleProperty, value: StyleValue) {
        if let Some(n) = self.nodes.get_mut(element.0) {
            if n.style.insert(property, value) != Some(value) {
                self.style_mutations += 1;
            }
        }
    }

    fn remove_style(&mut self, element: &NodeId, property: StyleProperty) {
        if let Some(n) = self.nodes.get_mut(element.0) {
            if n.style.remove(&property).is_some() {
                self.style_mutations += 1;
            }
        }
    }

    fn is_connected(&self, element: &NodeId) -> bool {
        *element == self.document() || self.is_ancestor(self.document(), *element)
    }
}

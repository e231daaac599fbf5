use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::attr::{Color, NodeShape, Point};

/// Attributes of a single node.
///
/// For the full list of node attributes see
/// <http://www.graphviz.org/doc/info/attrs.html>.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeBuilder {
    /// Outline color.
    pub color: Option<Color>,
    /// Background color, used when `style` is `filled`.
    pub fill_color: Option<Color>,
    /// Text color.
    pub font_color: Option<Color>,
    pub group: Option<String>,
    /// An empty label is treated as unset; use `" "` for a blank one.
    pub label: Option<String>,
    /// Position in inches.
    pub position: Option<Point>,
    pub shape: Option<NodeShape>,
    pub style: Option<String>,
}

crate::attr_table!(NodeBuilder {
    color => "color",
    fill_color => "fillcolor",
    font_color => "fontcolor",
    group => "group",
    label => "label",
    position => "pos",
    shape => "shape",
    style => "style",
});

impl NodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    pub fn with_font_color(mut self, color: Color) -> Self {
        self.font_color = Some(color);
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_shape(mut self, shape: NodeShape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Move the record behind a fresh identity.
    pub fn into_ref(self) -> NodeRef {
        NodeRef::new(self)
    }
}

/// Shared handle to a [`NodeBuilder`].
///
/// Equality and hashing use the allocation address: two handles are the same
/// node only if one was cloned from the other. The record stays mutable after
/// the node joins a graph, and every graph holding the handle sees the change
/// at its next `build`.
#[derive(Clone, Default)]
pub struct NodeRef(Rc<RefCell<NodeBuilder>>);

impl NodeRef {
    pub fn new(node: NodeBuilder) -> Self {
        Self(Rc::new(RefCell::new(node)))
    }

    /// Shorthand for a node carrying only a label.
    pub fn labeled(label: impl Into<String>) -> Self {
        NodeBuilder::new().with_label(label).into_ref()
    }

    /// # Panics
    /// Panics if the node is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, NodeBuilder> {
        self.0.borrow()
    }

    /// # Panics
    /// Panics if the node is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, NodeBuilder> {
        self.0.borrow_mut()
    }

    /// Mutate the record in place.
    pub fn update<R>(&self, f: impl FnOnce(&mut NodeBuilder) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }

    /// Copy of the current field values.
    pub fn snapshot(&self) -> NodeBuilder {
        self.0.borrow().clone()
    }

    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<NodeBuilder> for NodeRef {
    fn from(node: NodeBuilder) -> Self {
        NodeRef::new(node)
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for NodeRef {}

impl Hash for NodeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).hash(state);
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(node) => f
                .debug_tuple("NodeRef")
                .field(&Rc::as_ptr(&self.0))
                .field(&*node)
                .finish(),
            Err(_) => f
                .debug_tuple("NodeRef")
                .field(&Rc::as_ptr(&self.0))
                .field(&"<borrowed>")
                .finish(),
        }
    }
}

/// Create `count` distinct blank nodes.
pub fn gen_nodes(count: usize) -> Vec<NodeRef> {
    (0..count).map(|_| NodeRef::default()).collect()
}

/// Create `count` distinct nodes, each starting from a copy of `template`.
pub fn gen_nodes_from_template(count: usize, template: &NodeBuilder) -> Vec<NodeRef> {
    (0..count).map(|_| template.clone().into_ref()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttrSource;

    #[test]
    fn identity_is_by_handle() {
        let a = NodeRef::labeled("same");
        let b = NodeRef::labeled("same");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(*a.borrow(), *b.borrow());
    }

    #[test]
    fn mutation_is_visible_through_clones() {
        let a = NodeRef::labeled("before");
        let alias = a.clone();
        alias.update(|n| n.label = Some("after".into()));
        assert_eq!(a.borrow().label.as_deref(), Some("after"));
    }

    #[test]
    fn node_attribute_table() {
        let node = NodeBuilder::new()
            .with_style("filled")
            .with_label("A")
            .with_shape(NodeShape::BOX)
            .with_fill_color(Color::RED)
            .with_position(Point::locked(1.0, 0.5))
            .with_group("g")
            .with_font_color(Color::BLUE)
            .with_color(Color::BLACK);

        let names: Vec<_> = node.attributes().iter().map(|a| a.name).collect();
        assert_eq!(
            names,
            vec!["color", "fillcolor", "fontcolor", "group", "label", "pos", "shape", "style"]
        );
        assert!(NodeBuilder::new().attributes().is_empty());
    }

    #[test]
    fn generated_nodes_are_distinct() {
        let nodes = gen_nodes(3);
        assert_eq!(nodes.len(), 3);
        assert_ne!(nodes[0], nodes[1]);
        assert_ne!(nodes[1], nodes[2]);

        let template = NodeBuilder::new().with_shape(NodeShape::CIRCLE);
        let copies = gen_nodes_from_template(2, &template);
        assert_ne!(copies[0], copies[1]);
        copies[0].update(|n| n.label = Some("changed".into()));
        assert_eq!(copies[1].borrow().label, None);
        assert_eq!(copies[1].borrow().shape, Some(NodeShape::CIRCLE));
    }

    #[test]
    fn snapshot_is_detached_from_handle() {
        let node = NodeRef::labeled("before");
        let copy = node.snapshot();
        node.update(|n| n.label = Some("after".into()));
        assert_eq!(copy.label.as_deref(), Some("before"));
        assert_eq!(node.borrow().label.as_deref(), Some("after"));

        let rewrapped = copy.into_ref();
        assert_ne!(rewrapped, node);
    }
}

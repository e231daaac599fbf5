use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::attr::Color;
use crate::builder::NodeRef;

/// An edge between two nodes plus its attributes.
///
/// Either endpoint may be left unset while the graph is assembled; an edge
/// still missing one at `build` time is left out of the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeBuilder {
    pub src: Option<NodeRef>,
    pub dst: Option<NodeRef>,

    pub color: Option<Color>,
    /// Arrowhead fill, used when `style` is `filled`.
    pub fill_color: Option<Color>,
    pub font_color: Option<Color>,
    pub label: Option<String>,
    /// Preferred edge length (`len`).
    pub length: Option<String>,
    pub style: Option<String>,
}

crate::attr_table!(EdgeBuilder {
    color => "color",
    fill_color => "fillcolor",
    font_color => "fontcolor",
    label => "label",
    length => "len",
    style => "style",
});

impl EdgeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn between(src: &NodeRef, dst: &NodeRef) -> Self {
        Self {
            src: Some(src.clone()),
            dst: Some(dst.clone()),
            ..Self::default()
        }
    }

    pub fn with_src(mut self, src: &NodeRef) -> Self {
        self.src = Some(src.clone());
        self
    }

    pub fn with_dst(mut self, dst: &NodeRef) -> Self {
        self.dst = Some(dst.clone());
        self
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

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_length(mut self, length: impl Into<String>) -> Self {
        self.length = Some(length.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn into_ref(self) -> EdgeRef {
        EdgeRef::new(self)
    }
}

/// Shared handle to an [`EdgeBuilder`], compared by address like [`NodeRef`].
#[derive(Clone, Default)]
pub struct EdgeRef(Rc<RefCell<EdgeBuilder>>);

impl EdgeRef {
    pub fn new(edge: EdgeBuilder) -> Self {
        Self(Rc::new(RefCell::new(edge)))
    }

    pub fn between(src: &NodeRef, dst: &NodeRef) -> Self {
        EdgeBuilder::between(src, dst).into_ref()
    }

    /// # Panics
    /// Panics if the edge is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, EdgeBuilder> {
        self.0.borrow()
    }

    /// # Panics
    /// Panics if the edge is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, EdgeBuilder> {
        self.0.borrow_mut()
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut EdgeBuilder) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }

    /// Current endpoints, source first.
    pub fn endpoints(&self) -> (Option<NodeRef>, Option<NodeRef>) {
        let edge = self.0.borrow();
        (edge.src.clone(), edge.dst.clone())
    }

    pub fn ptr_eq(&self, other: &EdgeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<EdgeBuilder> for EdgeRef {
    fn from(edge: EdgeBuilder) -> Self {
        EdgeRef::new(edge)
    }
}

impl PartialEq for EdgeRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for EdgeRef {}

impl Hash for EdgeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).hash(state);
    }
}

impl fmt::Debug for EdgeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(edge) => f
                .debug_tuple("EdgeRef")
                .field(&Rc::as_ptr(&self.0))
                .field(&*edge)
                .finish(),
            Err(_) => f
                .debug_tuple("EdgeRef")
                .field(&Rc::as_ptr(&self.0))
                .field(&"<borrowed>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttrSource;

    #[test]
    fn endpoints_are_not_attributes() {
        let a = NodeRef::labeled("a");
        let b = NodeRef::labeled("b");
        let edge = EdgeBuilder::between(&a, &b)
            .with_length("2.5")
            .with_label("x")
            .with_style("dotted");

        let attrs: Vec<_> = edge
            .attributes()
            .into_iter()
            .map(|a| (a.name, a.value))
            .collect();
        assert_eq!(
            attrs,
            vec![
                ("label", "x".to_string()),
                ("len", "2.5".to_string()),
                ("style", "dotted".to_string()),
            ]
        );
    }

    #[test]
    fn endpoints_can_be_filled_in_later() {
        let edge = EdgeRef::new(EdgeBuilder::new());
        assert_eq!(edge.endpoints(), (None, None));

        let a = NodeRef::labeled("a");
        edge.update(|e| e.src = Some(a.clone()));
        let (src, dst) = edge.endpoints();
        assert_eq!(src, Some(a));
        assert_eq!(dst, None);
    }

    #[test]
    fn identity_is_by_handle() {
        let a = NodeRef::default();
        let e1 = EdgeRef::between(&a, &a);
        let e2 = EdgeRef::between(&a, &a);
        assert_ne!(e1, e2);
        assert_eq!(e1, e1.clone());
    }
}

//! Attribute vocabulary: graph kinds, colors, node shapes and points.
//!
//! See <http://www.graphviz.org/doc/info/attrs.html> for what the renderer
//! accepts. Values here are opaque; they only know how to print themselves.

use std::borrow::Cow;
use std::fmt;

/// Directed or undirected graph, paired with its edge operator.
///
/// Corresponds to the `graph` and `edgeop` nonterminals of the DOT grammar
/// (<http://www.graphviz.org/doc/info/lang.html>).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphKind {
    Directed,
    Undirected,
}

impl GraphKind {
    /// Keyword opening the graph: `digraph` or `graph`.
    pub fn name(&self) -> &'static str {
        match self {
            GraphKind::Directed => "digraph",
            GraphKind::Undirected => "graph",
        }
    }

    /// Operator written between the two endpoints of an edge.
    pub fn delimiter(&self) -> &'static str {
        match self {
            GraphKind::Directed => "->",
            GraphKind::Undirected => "--",
        }
    }

    pub fn is_directed(&self) -> bool {
        matches!(self, GraphKind::Directed)
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Color of a node, edge or its text.
///
/// Only a handful of X11 names are predefined; `Color::named` covers the rest
/// (<http://www.graphviz.org/doc/info/colors.html>).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(Cow<'static, str>);

impl Color {
    pub const ALICEBLUE: Color = Color::from_static("aliceblue");
    pub const AQUAMARINE: Color = Color::from_static("aquamarine");
    pub const BLACK: Color = Color::from_static("black");
    pub const BLUE: Color = Color::from_static("blue");
    pub const CHARTREUSE: Color = Color::from_static("chartreuse");
    pub const CORNFLOWERBLUE: Color = Color::from_static("cornflowerblue");
    pub const CRIMSON: Color = Color::from_static("crimson");
    pub const CYAN: Color = Color::from_static("cyan");
    pub const GRAY: Color = Color::from_static("gray");
    pub const RED: Color = Color::from_static("red");

    const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Any color string the renderer understands, e.g. `"#ff8800"`.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shape of a node (<http://www.graphviz.org/doc/info/shapes.html>).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeShape(Cow<'static, str>);

impl NodeShape {
    pub const BOX: NodeShape = NodeShape(Cow::Borrowed("box"));
    pub const CIRCLE: NodeShape = NodeShape(Cow::Borrowed("circle"));
    pub const RECT: NodeShape = NodeShape(Cow::Borrowed("rect"));

    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A two dimensional point, in inches. Usually positions a node.
///
/// Prints as `x,y` with six decimals; a locked point gets a trailing `!`,
/// which asks the layout engine not to move it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub lock: bool,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, lock: false }
    }

    pub fn locked(x: f32, y: f32) -> Self {
        Self { x, y, lock: true }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.x, self.y)?;
        if self.lock {
            f.write_str("!")?;
        }
        Ok(())
    }
}

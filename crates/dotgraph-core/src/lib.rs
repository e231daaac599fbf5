//! Build graphs in memory and compile them for DOT output.
//!
//! ```rust
//! use dotgraph_core::{EdgeRef, GraphBuilder, GraphKind, NodeRef};
//!
//! let mut graph = GraphBuilder::new(GraphKind::Undirected);
//! let a = NodeRef::labeled("A");
//! let b = NodeRef::labeled("B");
//! graph.add_edges([EdgeRef::between(&a, &b)]);
//!
//! let doc = graph.build();
//! assert_eq!(doc.nodes().len(), 2);
//! assert_eq!(doc.edges()[0].delimiter(), "--");
//! ```
//!
//! Rendering the compiled [`Document`] to text lives in `dotgraph-dot`.

pub mod attr;
#[macro_use]
pub mod attribute;
pub mod builder;
pub mod document;
pub mod set;

pub use attr::{Color, GraphKind, NodeShape, Point};
pub use attribute::{AttrField, AttrList, AttrSource, AttrValue, Attribute, extract_attributes};
pub use builder::{
    EdgeBuilder, EdgeRef, GraphAttributes, GraphBuilder, NodeBuilder, NodeRef, gen_nodes,
    gen_nodes_from_template,
};
pub use document::{Document, DotEdge, DotNode};
pub use set::OrderedSet;

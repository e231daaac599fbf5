//! Mutable graph description: nodes, edges, templates and graph attributes.
//!
//! Builders are single-threaded. Handles are `Rc` based, so a builder cannot
//! cross a thread boundary; compile it with [`GraphBuilder::build`] first.

mod edge;
mod graph;
mod node;

pub use edge::{EdgeBuilder, EdgeRef};
pub use graph::{GraphAttributes, GraphBuilder};
pub use node::{NodeBuilder, NodeRef, gen_nodes, gen_nodes_from_template};

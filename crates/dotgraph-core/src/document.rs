//! Compiled, immutable graph ready for serialization.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::attr::GraphKind;
use crate::attribute::{AttrList, AttrSource};
use crate::builder::{EdgeRef, GraphAttributes, NodeRef};
use crate::set::OrderedSet;

/// A node with its assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct DotNode {
    id: usize,
    attributes: AttrList,
}

impl DotNode {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn attributes(&self) -> &AttrList {
        &self.attributes
    }
}

/// An edge whose endpoints resolved to node ids.
#[derive(Debug, Clone, PartialEq)]
pub struct DotEdge {
    src: usize,
    dst: usize,
    delimiter: &'static str,
    attributes: AttrList,
}

impl DotEdge {
    pub fn src(&self) -> usize {
        self.src
    }

    pub fn dst(&self) -> usize {
        self.dst
    }

    /// `->` or `--`, matching the graph kind.
    pub fn delimiter(&self) -> &'static str {
        self.delimiter
    }

    pub fn attributes(&self) -> &AttrList {
        &self.attributes
    }
}

/// Snapshot produced by [`GraphBuilder::build`](crate::GraphBuilder::build).
///
/// Holds only owned strings and ids, so it can be shared across threads and
/// serialized any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    kind: GraphKind,
    nodes: Vec<DotNode>,
    edges: Vec<DotEdge>,
    node_template: Option<AttrList>,
    edge_template: Option<AttrList>,
    attributes: AttrList,
}

impl Document {
    pub(crate) fn compile(
        kind: GraphKind,
        nodes: &OrderedSet<NodeRef>,
        edges: &OrderedSet<EdgeRef>,
        node_template: Option<&NodeRef>,
        edge_template: Option<&EdgeRef>,
        attributes: &GraphAttributes,
    ) -> Self {
        let (nodes, ids) = compile_nodes(nodes);
        let edges_total = edges.count();
        let edges = compile_edges(edges, &ids, kind.delimiter());

        debug!(
            kind = kind.name(),
            nodes = nodes.len(),
            edges = edges.len(),
            dropped_edges = edges_total - edges.len(),
            "compiled graph document"
        );

        Self {
            kind,
            nodes,
            edges,
            node_template: node_template.map(|t| t.borrow().attributes()),
            edge_template: edge_template.map(|t| t.borrow().attributes()),
            attributes: attributes.attributes(),
        }
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn nodes(&self) -> &[DotNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[DotEdge] {
        &self.edges
    }

    /// Attributes of the node template, if one was set.
    pub fn node_template(&self) -> Option<&AttrList> {
        self.node_template.as_ref()
    }

    pub fn edge_template(&self) -> Option<&AttrList> {
        self.edge_template.as_ref()
    }

    /// Graph-level attributes.
    pub fn attributes(&self) -> &AttrList {
        &self.attributes
    }
}

fn compile_nodes(builders: &OrderedSet<NodeRef>) -> (Vec<DotNode>, HashMap<NodeRef, usize>) {
    let mut nodes = Vec::with_capacity(builders.count());
    let mut ids = HashMap::with_capacity(builders.count());

    for (id, builder) in builders.iter().enumerate() {
        nodes.push(DotNode {
            id,
            attributes: builder.borrow().attributes(),
        });
        ids.insert(builder.clone(), id);
    }

    (nodes, ids)
}

fn compile_edges(
    builders: &OrderedSet<EdgeRef>,
    ids: &HashMap<NodeRef, usize>,
    delimiter: &'static str,
) -> Vec<DotEdge> {
    let mut edges = Vec::with_capacity(builders.count());

    for builder in builders {
        let edge = builder.borrow();
        let (Some(src), Some(dst)) = (&edge.src, &edge.dst) else {
            trace!("skipping edge with an unset endpoint");
            continue;
        };
        // Endpoints set but removed from the node set since the edge was added.
        let (Some(&src), Some(&dst)) = (ids.get(src), ids.get(dst)) else {
            trace!("skipping edge whose endpoint is not a member of the graph");
            continue;
        };
        edges.push(DotEdge {
            src,
            dst,
            delimiter,
            attributes: edge.attributes(),
        });
    }

    edges
}

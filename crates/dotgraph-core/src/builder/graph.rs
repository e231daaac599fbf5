use std::borrow::Borrow;

use crate::attr::GraphKind;
use crate::builder::{EdgeRef, NodeRef};
use crate::document::Document;
use crate::set::OrderedSet;

/// Graph-level attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphAttributes {
    /// Centered at the bottom of the rendered graph.
    pub label: Option<String>,
}

crate::attr_table!(GraphAttributes {
    label => "label",
});

/// Builder for a DOT graph.
///
/// Node ids are not chosen by the caller: `build` numbers nodes 0..n-1 in the
/// order they first joined the graph.
#[derive(Debug)]
pub struct GraphBuilder {
    kind: GraphKind,
    nodes: OrderedSet<NodeRef>,
    edges: OrderedSet<EdgeRef>,
    node_template: Option<NodeRef>,
    edge_template: Option<EdgeRef>,
    attributes: GraphAttributes,
}

impl GraphBuilder {
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            nodes: OrderedSet::new(),
            edges: OrderedSet::new(),
            node_template: None,
            edge_template: None,
            attributes: GraphAttributes::default(),
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn attributes(&self) -> &GraphAttributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut GraphAttributes {
        &mut self.attributes
    }

    pub fn label(&self) -> Option<&str> {
        self.attributes.label.as_deref()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.attributes.label = Some(label.into());
    }

    /// Member nodes in insertion order. Mutating the returned vector has no
    /// effect on the graph; mutating the nodes does.
    pub fn nodes(&self) -> Vec<NodeRef> {
        self.nodes.iter().cloned().collect()
    }

    /// Member edges in insertion order.
    pub fn edges(&self) -> Vec<EdgeRef> {
        self.edges.iter().cloned().collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.count()
    }

    pub fn contains_node(&self, node: &NodeRef) -> bool {
        self.nodes.contains(node)
    }

    pub fn contains_edge(&self, edge: &EdgeRef) -> bool {
        self.edges.contains(edge)
    }

    pub fn node_template(&self) -> Option<&NodeRef> {
        self.node_template.as_ref()
    }

    /// Attributes of the template are written once, in a `node [...]` block.
    /// They are not merged into individual nodes.
    pub fn set_node_template(&mut self, template: Option<NodeRef>) {
        self.node_template = template;
    }

    pub fn edge_template(&self) -> Option<&EdgeRef> {
        self.edge_template.as_ref()
    }

    pub fn set_edge_template(&mut self, template: Option<EdgeRef>) {
        self.edge_template = template;
    }

    /// Adds nodes to the graph and returns how many were new.
    /// Adding a node that is already a member has no effect.
    pub fn add_nodes<I>(&mut self, nodes: I) -> usize
    where
        I: IntoIterator,
        I::Item: Borrow<NodeRef>,
    {
        let mut count = 0;
        for node in nodes {
            let node: &NodeRef = node.borrow();
            if self.nodes.add(node.clone()) {
                count += 1;
            }
        }
        count
    }

    /// Removes nodes from the graph and returns how many were members.
    /// Edges pointing at a removed node stay in the graph but are skipped by
    /// `build` until the node is added back.
    pub fn remove_nodes<I>(&mut self, nodes: I) -> usize
    where
        I: IntoIterator,
        I::Item: Borrow<NodeRef>,
    {
        let mut count = 0;
        for node in nodes {
            if self.nodes.remove(node.borrow()) {
                count += 1;
            }
        }
        count
    }

    /// Adds edges to the graph and returns how many were new.
    ///
    /// Endpoints not yet in the graph are added too, source before
    /// destination, so a graph can be built from edges alone. The endpoint
    /// insertions do not count towards the result.
    pub fn add_edges<I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator,
        I::Item: Borrow<EdgeRef>,
    {
        let mut count = 0;
        for edge in edges {
            let edge: &EdgeRef = edge.borrow();
            if !self.edges.add(edge.clone()) {
                continue;
            }
            let (src, dst) = edge.endpoints();
            self.add_nodes(src.iter().chain(dst.iter()));
            count += 1;
        }
        count
    }

    /// Removes edges from the graph and returns how many were members.
    /// Endpoint nodes are kept even if nothing references them anymore.
    pub fn remove_edges<I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator,
        I::Item: Borrow<EdgeRef>,
    {
        let mut count = 0;
        for edge in edges {
            if self.edges.remove(edge.borrow()) {
                count += 1;
            }
        }
        count
    }

    /// Compile the current state into an immutable [`Document`].
    ///
    /// Does not modify the builder. Call again after further edits to get an
    /// updated document.
    ///
    /// # Panics
    /// Panics if a member node or edge is mutably borrowed at the time of the
    /// call.
    pub fn build(&self) -> Document {
        Document::compile(
            self.kind,
            &self.nodes,
            &self.edges,
            self.node_template.as_ref(),
            self.edge_template.as_ref(),
            &self.attributes,
        )
    }
}

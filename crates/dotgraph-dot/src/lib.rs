//! Render compiled graph documents to DOT format.
//!
//! # Module Structure
//!
//! - [`dot`]: line-level DOT emission ([`DotWriter`]) and value escaping
//!
//! The output of [`render_document`] for a two node digraph:
//!
//! ```text
//! digraph {
//! 	0 [label="A"];
//! 	1 [label="B"];
//!
//! 	0 -> 1;
//! }
//! ```
//!
//! Feed it to Graphviz, e.g. `dotgraph petersen | dot -Tpng > petersen.png`.

pub mod dot;

use std::io::Write;

use tracing::debug;

use dotgraph_core::Document;
use dotgraph_error::Result;

pub use dot::{BlockAttrs, DotWriter, InlineAttrs, escape_value};

// ============================================================================
// Public API
// ============================================================================

/// Write the DOT representation of `doc` to `writer`.
///
/// Stops at the first failed write; whatever was written before stays written.
pub fn write_document<W: Write + ?Sized>(doc: &Document, writer: &mut W) -> Result<()> {
    write_sections(doc, &mut DotWriter::new(writer)).map_err(|e| e.with_operation("dot::write"))?;
    debug!(
        nodes = doc.nodes().len(),
        edges = doc.edges().len(),
        "wrote dot document"
    );
    Ok(())
}

/// Render `doc` to an owned string.
pub fn render_document(doc: &Document) -> String {
    let mut buf = Vec::with_capacity(doc.nodes().len() * 32 + doc.edges().len() * 32 + 32);
    // Writing into a Vec cannot fail.
    let _ = write_document(doc, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

fn write_sections<W: Write + ?Sized>(doc: &Document, out: &mut DotWriter<'_, W>) -> Result<()> {
    out.header(doc.kind())?;
    out.graph_attributes(doc.attributes())?;

    if let Some(attrs) = doc.node_template() {
        out.template("node", attrs)?;
    }
    if let Some(attrs) = doc.edge_template() {
        out.template("edge", attrs)?;
    }

    for node in doc.nodes() {
        out.node(node)?;
    }
    out.separator()?;
    for edge in doc.edges() {
        out.edge(edge)?;
    }

    out.footer()
}

/// Anything that can print itself as a DOT graph.
pub trait WriteDot {
    /// Write the DOT representation to `writer`.
    fn write_dot<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()>;

    /// The DOT representation as a string.
    fn to_dot(&self) -> String;
}

impl WriteDot for Document {
    fn write_dot<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        write_document(self, writer)
    }

    fn to_dot(&self) -> String {
        render_document(self)
    }
}

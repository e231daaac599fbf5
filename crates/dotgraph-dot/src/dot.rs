//! DOT text emission.

use std::borrow::Cow;
use std::fmt;
use std::io::Write;

use dotgraph_core::{Attribute, DotEdge, DotNode, GraphKind};
use dotgraph_error::{Error, Result};

/// Escape double quotes so a value stays inside its quoted string.
///
/// Other backslashes are left alone: DOT gives `\n`, `\l` and friends a
/// meaning inside labels and callers may rely on them. A value ending in an
/// odd run of backslashes gets one more, or the closing quote would be
/// escaped.
pub fn escape_value(input: &str) -> Cow<'_, str> {
    let trailing = input.bytes().rev().take_while(|&b| b == b'\\').count();
    let dangling = trailing % 2 == 1;
    if !dangling && !input.contains('"') {
        return Cow::Borrowed(input);
    }
    let mut escaped = input.replace('"', "\\\"");
    if dangling {
        escaped.push('\\');
    }
    Cow::Owned(escaped)
}

/// `name="value", name="value"` for node and edge lines.
pub struct InlineAttrs<'a>(pub &'a [Attribute]);

impl fmt::Display for InlineAttrs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attr) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}=\"{}\"", attr.name, escape_value(&attr.value))?;
        }
        Ok(())
    }
}

/// One attribute per line, each indented by `indent` tabs.
pub struct BlockAttrs<'a> {
    pub attrs: &'a [Attribute],
    pub indent: usize,
}

impl fmt::Display for BlockAttrs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attr) in self.attrs.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write_indent(f, self.indent)?;
            write!(f, "{}=\"{}\"", attr.name, escape_value(&attr.value))?;
        }
        Ok(())
    }
}

fn write_indent(f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
    for _ in 0..level {
        f.write_str("\t")?;
    }
    Ok(())
}

/// Writes the pieces of a DOT document to an output sink.
///
/// Each call emits complete lines. The first failed write is returned as
/// `ErrorKind::WriteFailed`; nothing already written is taken back.
pub struct DotWriter<'w, W: Write + ?Sized> {
    out: &'w mut W,
}

impl<'w, W: Write + ?Sized> DotWriter<'w, W> {
    pub fn new(out: &'w mut W) -> Self {
        Self { out }
    }

    fn emit(&mut self, operation: &'static str, args: fmt::Arguments<'_>) -> Result<()> {
        self.out
            .write_fmt(args)
            .map_err(|err| Error::write_failed(err).with_operation(operation))
    }

    /// `digraph {` or `graph {`.
    pub fn header(&mut self, kind: GraphKind) -> Result<()> {
        self.emit("dot::write_header", format_args!("{} {{\n", kind.name()))
    }

    /// Graph-level attributes, framed by blank lines. Nothing for an empty list.
    pub fn graph_attributes(&mut self, attrs: &[Attribute]) -> Result<()> {
        if attrs.is_empty() {
            return Ok(());
        }
        let block = BlockAttrs { attrs, indent: 1 };
        self.emit("dot::write_graph_attributes", format_args!("\n{block}\n\n"))
    }

    /// A `node [...]` or `edge [...]` defaults block.
    pub fn template(&mut self, keyword: &str, attrs: &[Attribute]) -> Result<()> {
        if attrs.is_empty() {
            return self.emit("dot::write_template", format_args!("\t{keyword} []\n\n"));
        }
        let block = BlockAttrs { attrs, indent: 2 };
        self.emit(
            "dot::write_template",
            format_args!("\t{keyword} [\n{block}\n\t]\n\n"),
        )
    }

    pub fn node(&mut self, node: &DotNode) -> Result<()> {
        let attrs = node.attributes();
        if attrs.is_empty() {
            self.emit("dot::write_node", format_args!("\t{};\n", node.id()))
        } else {
            self.emit(
                "dot::write_node",
                format_args!("\t{} [{}];\n", node.id(), InlineAttrs(attrs)),
            )
        }
    }

    /// The blank line between node and edge lines.
    pub fn separator(&mut self) -> Result<()> {
        self.emit("dot::write_separator", format_args!("\n"))
    }

    pub fn edge(&mut self, edge: &DotEdge) -> Result<()> {
        let attrs = edge.attributes();
        if attrs.is_empty() {
            self.emit(
                "dot::write_edge",
                format_args!("\t{} {} {};\n", edge.src(), edge.delimiter(), edge.dst()),
            )
        } else {
            self.emit(
                "dot::write_edge",
                format_args!(
                    "\t{} {} {} [{}];\n",
                    edge.src(),
                    edge.delimiter(),
                    edge.dst(),
                    InlineAttrs(attrs)
                ),
            )
        }
    }

    pub fn footer(&mut self) -> Result<()> {
        self.emit("dot::write_footer", format_args!("}}\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotgraph_core::{GraphBuilder, NodeRef};
    use pretty_assertions::assert_eq;

    fn attrs(pairs: &[(&'static str, &str)]) -> Vec<Attribute> {
        pairs.iter().map(|(n, v)| Attribute::new(*n, *v)).collect()
    }

    fn written(f: impl FnOnce(&mut DotWriter<'_, Vec<u8>>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut DotWriter::new(&mut buf)).expect("write to vec");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn test_escape_value() {
        assert_eq!(escape_value("plain"), "plain");
        assert_eq!(escape_value(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_value(r"line\nbreak"), r"line\nbreak");
    }

    #[test]
    fn test_escape_trailing_backslash() {
        assert_eq!(escape_value(r"C:\dir\"), r"C:\dir\\");
        assert_eq!(escape_value(r"even\\"), r"even\\");
        assert_eq!(escape_value(r"odd\\\"), r"odd\\\\");
    }

    #[test]
    fn test_inline_attrs() {
        let list = attrs(&[("label", "a"), ("color", "red")]);
        assert_eq!(InlineAttrs(&list).to_string(), r#"label="a", color="red""#);
        assert_eq!(InlineAttrs(&[]).to_string(), "");
    }

    #[test]
    fn test_block_attrs() {
        let list = attrs(&[("label", " "), ("shape", "circle")]);
        let block = BlockAttrs {
            attrs: &list,
            indent: 2,
        };
        assert_eq!(block.to_string(), "\t\tlabel=\" \"\n\t\tshape=\"circle\"");
    }

    #[test]
    fn test_graph_attributes_block() {
        let list = attrs(&[("label", "title")]);
        assert_eq!(
            written(|w| w.graph_attributes(&list)),
            "\n\tlabel=\"title\"\n\n"
        );
        assert_eq!(written(|w| w.graph_attributes(&[])), "");
    }

    #[test]
    fn test_template_block() {
        let list = attrs(&[("color", "black"), ("style", "filled")]);
        assert_eq!(
            written(|w| w.template("node", &list)),
            "\tnode [\n\t\tcolor=\"black\"\n\t\tstyle=\"filled\"\n\t]\n\n"
        );
        assert_eq!(written(|w| w.template("edge", &[])), "\tedge []\n\n");
    }

    #[test]
    fn test_node_and_edge_lines() {
        let mut gb = GraphBuilder::undirected();
        let a = NodeRef::labeled("A");
        let b = NodeRef::default();
        gb.add_edges([dotgraph_core::EdgeRef::between(&a, &b)]);
        let doc = gb.build();

        let out = written(|w| {
            for node in doc.nodes() {
                w.node(node)?;
            }
            w.edge(&doc.edges()[0])
        });
        assert_eq!(out, "\t0 [label=\"A\"];\n\t1;\n\t0 -- 1;\n");
    }
}

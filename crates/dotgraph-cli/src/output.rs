//! Output sinks (stdout or a file).

use std::fs::File;
use std::io::{BufWriter, Write};

use tracing::info;

use dotgraph_core::Document;
use dotgraph_dot::write_document;
use dotgraph_error::{Error, Result};

/// Write `doc` to `path`, or to stdout when no path is given.
pub fn write_output(doc: &Document, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|err| {
                Error::from(err)
                    .with_operation("cli::write_output")
                    .with_context("path", path)
            })?;
            let mut out = BufWriter::new(file);
            write_document(doc, &mut out).map_err(|e| e.with_context("path", path))?;
            out.flush().map_err(|err| {
                Error::write_failed(err)
                    .with_operation("cli::write_output")
                    .with_context("path", path)
            })?;
            info!(path, "output written");
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            write_document(doc, &mut out)?;
            out.flush().map_err(Error::write_failed)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotgraph_core::{GraphBuilder, GraphKind, NodeRef};
    use dotgraph_error::ErrorKind;

    #[test]
    fn writes_to_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("graph.dot");
        let path = path.to_str().expect("utf8 path");

        let mut graph = GraphBuilder::new(GraphKind::Directed);
        graph.add_nodes([NodeRef::labeled("only")]);
        write_output(&graph.build(), Some(path)).expect("write");

        let text = std::fs::read_to_string(path).expect("read back");
        assert_eq!(text, "digraph {\n\t0 [label=\"only\"];\n\n}\n");
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("graph.dot");
        let path = path.to_str().expect("utf8 path");

        let doc = GraphBuilder::new(GraphKind::Undirected).build();
        let err = write_output(&doc, Some(path)).expect_err("no such directory");
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert_eq!(err.operation(), "cli::write_output");
        assert!(err.context().iter().any(|(key, _)| *key == "path"));
    }
}

//! dotgraph command-line interface.
//!
pub mod demo;
pub mod output;

use std::time::Instant;

use tracing::info;

use dotgraph_core::{GraphBuilder, GraphKind};
use dotgraph_error::Result;

/// Which demo graph to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Demo {
    Petersen { kind: GraphKind },
    Cycle {
        kind: GraphKind,
        count: usize,
        label: String,
    },
}

/// Options for running dotgraph.
#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub demo: Demo,
    pub output: Option<String>,
}

/// Assemble the requested graph.
pub fn build_graph(demo: &Demo) -> Result<GraphBuilder> {
    match demo {
        Demo::Petersen { kind } => Ok(demo::petersen(*kind)),
        Demo::Cycle { kind, count, label } => demo::cycle(*kind, *count, label),
    }
}

/// Main entry point
pub fn run_main(opts: &DemoOptions) -> Result<()> {
    let start = Instant::now();

    let graph = build_graph(&opts.demo)?;
    let doc = graph.build();
    output::write_output(&doc, opts.output.as_deref())?;

    info!(
        nodes = doc.nodes().len(),
        edges = doc.edges().len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "graph written"
    );
    Ok(())
}

use clap::{Parser, Subcommand};

use dotgraph::{Demo, DemoOptions, run_main};
use dotgraph_core::GraphKind;
use dotgraph_error::Result;

#[derive(Parser, Debug)]
#[command(
    name = "dotgraph",
    about = "dotgraph: build graphs in code, emit Graphviz DOT",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE", global = true)]
    output: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// The Petersen graph with a 3-coloring and pinned node positions
    Petersen {
        /// Emit a digraph instead of an undirected graph
        #[arg(long, default_value_t = false)]
        directed: bool,
    },

    /// A ring of labeled nodes
    Cycle {
        /// Number of nodes in the ring
        #[arg(long, default_value_t = 5)]
        count: usize,

        /// Label attached to every edge
        #[arg(long, default_value = "a")]
        label: String,

        /// Emit an undirected graph instead of a digraph
        #[arg(long, default_value_t = false)]
        undirected: bool,
    },
}

fn kind(directed: bool) -> GraphKind {
    if directed {
        GraphKind::Directed
    } else {
        GraphKind::Undirected
    }
}

pub fn run(args: Cli) -> Result<()> {
    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let demo = match args.command {
        Command::Petersen { directed } => Demo::Petersen {
            kind: kind(directed),
        },
        Command::Cycle {
            count,
            label,
            undirected,
        } => Demo::Cycle {
            kind: kind(!undirected),
            count,
            label,
        },
    };

    let opts = DemoOptions {
        demo,
        output: args.output,
    };

    if let Err(e) = run_main(&opts) {
        tracing::error!(error = %e, "execution failed");
        return Err(e);
    }
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}

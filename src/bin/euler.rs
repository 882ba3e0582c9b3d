//! Offline Euler circuit tool.
//!
//! Loads a graph from an edge list file (`-i`) or generates a random simple graph (`-n`, `-m`,
//! `-s`), then prints whether an Euler circuit exists and, if so, the circuit.
//!
//! Exit codes: `0` whenever a verdict was printed, `1` for usage errors, `2` if the file could
//! not be loaded and `3` if the random graph could not be generated.

use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Parser};
use thiserror::Error;
use tracing::{error, info};

use eulergraphs::{algo::*, gens::*, io::*, logging, prelude::*};

/// Check a graph for an Euler circuit and print one if it exists.
#[derive(Debug, Parser)]
#[command(name = "euler")]
#[command(group(ArgGroup::new("graph").required(true).args(["input", "nodes"])))]
struct EulerArgs {
    /// Load the graph from an edge list file (`n m`, then `m` lines `u v`)
    #[arg(short = 'i', value_name = "PATH")]
    input: Option<PathBuf>,

    /// Number of vertices of a random graph
    #[arg(short = 'n', requires = "edges")]
    nodes: Option<NumNodes>,

    /// Number of edges of a random graph
    #[arg(short = 'm', requires = "nodes", conflicts_with = "input")]
    edges: Option<NumEdges>,

    /// Seed of a random graph
    #[arg(short = 's', default_value_t = 1, conflicts_with = "input")]
    seed: u64,
}

/// Failures to obtain the input graph, each with its own exit code
#[derive(Debug, Error)]
enum InputError {
    #[error("failed to load graph from '{}'", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to generate random graph")]
    Generate(#[source] GeneratorError),
}

impl InputError {
    fn exit_code(&self) -> ExitCode {
        match self {
            Self::Load { .. } => ExitCode::from(2),
            Self::Generate(_) => ExitCode::from(3),
        }
    }
}

fn load_graph(args: &EulerArgs) -> Result<AdjArrayUndir> {
    let graph = match (&args.input, args.nodes, args.edges) {
        (Some(path), _, _) => {
            AdjArrayUndir::try_read_edge_list_file(path).map_err(|source| InputError::Load {
                path: path.clone(),
                source,
            })?
        }
        (None, Some(n), Some(m)) => {
            AdjArrayUndir::random_simple(n, m, args.seed).map_err(InputError::Generate)?
        }
        _ => bail!("either -i or both -n and -m are required"),
    };
    Ok(graph)
}

fn write_verdict<W: Write>(graph: &AdjArrayUndir, writer: &mut W) -> io::Result<()> {
    let feasibility = graph.euler_feasibility();
    if !feasibility.ok {
        return writeln!(writer, "NO EULER CIRCUIT: {}", feasibility.reason);
    }

    let circuit = graph.find_circuit();
    writeln!(
        writer,
        "EULER CIRCUIT LENGTH (edges): {}",
        circuit.len().saturating_sub(1)
    )?;
    write!(writer, "CIRCUIT:")?;
    for v in circuit {
        write!(writer, " {v}")?;
    }
    writeln!(writer)
}

fn try_main(args: &EulerArgs) -> Result<()> {
    let graph = load_graph(args)?;
    info!(
        n = graph.number_of_nodes(),
        m = graph.number_of_edges(),
        "graph ready"
    );

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_verdict(&graph, &mut writer).context("failed to write result")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> ExitCode {
    err.downcast_ref::<InputError>()
        .map_or(ExitCode::FAILURE, InputError::exit_code)
}

fn main() -> ExitCode {
    let args = EulerArgs::parse();

    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main(&args) {
        error!(error = format!("{err:#}"), "euler failed");
        return exit_code(&err);
    }

    ExitCode::SUCCESS
}

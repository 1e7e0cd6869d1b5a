//! `kthmst` — enumerate every spanning tree of a weighted graph in
//! nondecreasing order of cost.
//!
//! Grounded on `toolbox_rs::solver::bin::main`'s shape: a `clap::Parser`
//! argument struct, `env_logger::init()`, and a thin `main` that delegates
//! to the library and maps errors to a process exit code.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use kthmst::report::{print_trees, write_html_report, PrintMode};
use kthmst::{solve, Graph, GraphError};
use log::{error, info};

/// Enumerate every spanning tree of a weighted graph, cheapest first.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the adjacency-matrix input file.
    input: PathBuf,

    /// Console output: 0 = silent, 1 = one tree per distinct cost, 2 = all trees.
    print_mode: u8,

    /// Optional path to write an HTML visualization of the results.
    #[arg(long)]
    html_out: Option<PathBuf>,

    /// Directory containing `head.html` and `tail.html` templates, used
    /// only with `--html-out`.
    #[arg(long, default_value = "html-templates")]
    html_templates: PathBuf,
}

fn run(args: Args) -> Result<(), GraphError> {
    let mode = PrintMode::from_code(args.print_mode).ok_or_else(|| {
        GraphError::InvalidInput(format!(
            "print_mode must be 0, 1, or 2, got {}",
            args.print_mode
        ))
    })?;

    let graph = Graph::read_adjacency_matrix_file(&args.input)?;
    info!(
        "read graph with {} vertices and {} edges from {}",
        graph.num_vertices(),
        graph.num_edges(),
        args.input.display()
    );

    let results = solve(&graph)?;
    match (results.first(), results.last()) {
        (Some(min), Some(max)) => info!(
            "found {} trees, from cost {} to {}",
            results.len(),
            min.cost,
            max.cost
        ),
        _ => info!("found 0 trees"),
    }

    let stdout = std::io::stdout();
    print_trees(&mut stdout.lock(), &results, mode)
        .map_err(|e| GraphError::InvalidInput(format!("failed to write console output: {e}")))?;

    if let Some(html_path) = args.html_out {
        let head_path = args.html_templates.join("head.html");
        let tail_path = args.html_templates.join("tail.html");
        let head = fs::read_to_string(&head_path).map_err(|e| {
            GraphError::InvalidInput(format!("cannot read {}: {e}", head_path.display()))
        })?;
        let tail = fs::read_to_string(&tail_path).map_err(|e| {
            GraphError::InvalidInput(format!("cannot read {}: {e}", tail_path.display()))
        })?;

        let mut file = fs::File::create(&html_path).map_err(|e| {
            GraphError::InvalidInput(format!("cannot create {}: {e}", html_path.display()))
        })?;
        write_html_report(&mut file, &graph, &results, mode, &head, &tail)
            .map_err(|e| GraphError::InvalidInput(format!("failed to write HTML report: {e}")))?;
        info!("wrote HTML report to {}", html_path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(GraphError::GraphNotConnected) => {
            error!("graph is not connected; no spanning tree exists");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

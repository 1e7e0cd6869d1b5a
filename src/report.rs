//! Console and HTML reporting for a solved set of [`Partition`]s.
//!
//! Grounded on `original_source/src/SpanningTreesFinder.cpp::PrintTrees` /
//! `writeOnlyKth` / `writeAllTrees` / `WriteToHtml`: the original prints
//! either nothing, one representative tree per distinct cost, or every
//! tree, and separately emits an HTML page by splicing a generated
//! `<script>` block between a `head.html` and a `tail.html` template. Ported
//! here with `write!`/`writeln!` against any `std::io::Write`, matching
//! `toolbox_rs`'s own preference for hand-rolled text templating
//! (`src/scaffold/bin/main.rs`) over a serialization crate — the page is
//! HTML-with-embedded-JS, not a JSON document, so `serde_json` would add a
//! dependency this crate otherwise has no use for.

use std::io::{self, Write};

use crate::graph::Graph;
use crate::partition::Partition;

/// How much console output [`print_trees`] produces.
///
/// `Silent` and `OneEach` were two numerically distinct codes in the
/// original CLI (`0` and `1`) that nonetheless produced identical output in
/// some drafts of `original_source/src/main.cpp`; here they are kept as
/// separate, deliberate variants with `Silent` printing nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// Print nothing.
    Silent,
    /// Print one representative tree per distinct cost.
    OneEach,
    /// Print every tree.
    All,
}

impl PrintMode {
    /// Parses the CLI's numeric `print_mode` argument.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Silent),
            1 => Some(Self::OneEach),
            2 => Some(Self::All),
            _ => None,
        }
    }
}

/// Writes a human-readable listing of `results` to `out`, per `mode`.
pub fn print_trees<W: Write>(out: &mut W, results: &[Partition], mode: PrintMode) -> io::Result<()> {
    match mode {
        PrintMode::Silent => Ok(()),
        PrintMode::OneEach => {
            let mut last_cost = None;
            for partition in results {
                if last_cost != Some(partition.cost) {
                    writeln!(out, "cost {}: {:?}", partition.cost, partition.mst_edges)?;
                    last_cost = Some(partition.cost);
                }
            }
            Ok(())
        }
        PrintMode::All => {
            for partition in results {
                writeln!(out, "cost {}: {:?}", partition.cost, partition.mst_edges)?;
            }
            Ok(())
        }
    }
}

/// Renders `results` as a standalone HTML page by splicing a generated
/// `<script>` block between `head` and `tail` template fragments.
///
/// The script defines `vertexCount` and `trees`, an array of arrays of
/// `{source, target, cost}` per-edge objects — one inner array per emitted
/// tree, enough for a page-side renderer to draw each tree without any
/// further server-side logic, matching `WriteToHtml`'s contract.
///
/// `mode` picks which trees are emitted exactly as [`print_trees`] does:
/// `Silent` and `OneEach` both emit one representative tree per distinct
/// cost (mirroring `writeOnlyKth`'s dispatch), `All` emits every tree
/// (`writeAllTrees`).
pub fn write_html_report<W: Write>(
    out: &mut W,
    graph: &Graph,
    results: &[Partition],
    mode: PrintMode,
    head: &str,
    tail: &str,
) -> io::Result<()> {
    write!(out, "{head}")?;

    writeln!(out, "<script>")?;
    writeln!(out, "const vertexCount = {};", graph.num_vertices())?;
    writeln!(out, "const trees = [")?;
    match mode {
        PrintMode::Silent | PrintMode::OneEach => {
            let mut last_cost = None;
            for partition in results {
                if last_cost != Some(partition.cost) {
                    write_tree(out, graph, partition)?;
                    last_cost = Some(partition.cost);
                }
            }
        }
        PrintMode::All => {
            for partition in results {
                write_tree(out, graph, partition)?;
            }
        }
    }
    writeln!(out, "];")?;
    writeln!(out, "</script>")?;

    write!(out, "{tail}")?;
    Ok(())
}

/// Writes one tree as an array of `{source, target, cost}` per-edge
/// objects.
fn write_tree<W: Write>(out: &mut W, graph: &Graph, partition: &Partition) -> io::Result<()> {
    write!(out, "  [")?;
    for &idx in &partition.mst_edges {
        let edge = graph.edges()[idx];
        write!(
            out,
            "{{ source: {}, target: {}, cost: {} }}, ",
            edge.u, edge.v, edge.w
        )?;
    }
    writeln!(out, "],")?;
    Ok(())
}

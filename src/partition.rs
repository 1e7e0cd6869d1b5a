//! The `EdgeChoice` tag and the `Partition` search-space description.
//!
//! Grounded on `original_source/src/Partition.h`, whose `EdgeChoice` enum
//! existed in three mutually inconsistent integer encodings across
//! coexisting drafts in the source tree (`0/1/-1` in one, `0/1/3` in
//! another) — exactly the latent bug a tagged Rust enum with no numeric
//! conflation rules out.

use crate::graph::Cost;

/// Per-edge constraint used by [`crate::kruskal::build_mst`] and the
/// [`crate::solver`] enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeChoice {
    /// Undecided: Kruskal may or may not include this edge.
    Free,
    /// Forced into the minimum spanning tree of this partition.
    In,
    /// Forbidden from the minimum spanning tree of this partition.
    Out,
}

/// A search-space description — an IN/OUT/FREE assignment to every edge —
/// together with the minimum spanning tree of that constrained graph.
///
/// `choices` has one entry per edge, indexed by edge index. `mst_edges`
/// holds the MST's edge indices in ascending order — the pinning rule in
/// [`crate::solver::solve`] requires this exact, partition-independent
/// ordering; see the module docs there for why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub choices: Vec<EdgeChoice>,
    pub mst_edges: Vec<usize>,
    pub cost: Cost,
}

impl Partition {
    pub(crate) fn new(choices: Vec<EdgeChoice>, mst_edges: Vec<usize>, cost: Cost) -> Self {
        Self {
            choices,
            mst_edges,
            cost,
        }
    }
}

//! Kruskal-with-constraints: the MST of a graph restricted by an
//! IN/OUT/FREE choice per edge.
//!
//! Grounded on `toolbox_rs::kruskal::kruskal`'s linear scan driven by a
//! union-find, but dropping its per-call `BinaryHeap` rebuild: the
//! graph's edges are already sorted once at construction
//! ([`crate::graph::Graph::new`]), so Phase A/B here walk that order
//! directly, matching the "near-linear per MST step" requirement more
//! closely than a rebuilt heap would.

use crate::graph::Graph;
use crate::partition::{EdgeChoice, Partition};
use crate::union_find::UnionFind;

/// Computes the MST of `graph` restricted by `choices`, reusing `uf`
/// (which is reset at the start of this call).
///
/// Returns `None` if the constrained graph is disconnected — an
/// `Infeasible` partition, per the spec's internal error taxonomy, which
/// never escapes to callers of [`crate::solver::solve`].
pub fn build_mst(graph: &Graph, uf: &mut UnionFind, choices: &[EdgeChoice]) -> Option<Partition> {
    uf.reset();

    let mut mst_edges = Vec::with_capacity(graph.num_vertices().saturating_sub(1));
    let mut cost: crate::graph::Cost = 0;

    // Phase A: forced edges are added unconditionally.
    for (i, edge) in graph.edges().iter().enumerate() {
        if choices[i] == EdgeChoice::In {
            uf.union(edge.u, edge.v);
            mst_edges.push(i);
            cost += edge.w;
        }
    }

    // Phase B: free edges, in ascending-weight order, short-circuiting
    // once the constrained graph is fully connected.
    for (i, edge) in graph.edges().iter().enumerate() {
        if uf.component_count() == 1 {
            break;
        }
        if choices[i] == EdgeChoice::Free && !uf.connected(edge.u, edge.v) {
            uf.union(edge.u, edge.v);
            mst_edges.push(i);
            cost += edge.w;
        }
    }

    if uf.component_count() > 1 {
        return None;
    }

    mst_edges.sort_unstable();
    Some(Partition::new(choices.to_vec(), mst_edges, cost))
}

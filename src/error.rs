//! Errors that cross the library boundary.
//!
//! Internal control-flow signals (an infeasible partition, a pop on an
//! empty heap) never reach a caller — see [`crate::partition`] and
//! [`crate::binary_heap`] respectively.

use thiserror::Error;

/// Errors reported by [`crate::graph`] construction and [`crate::solve`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The adjacency matrix or its wire encoding was malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The graph has no spanning tree because it is disconnected.
    #[error("the graph is not connected; no spanning tree exists")]
    GraphNotConnected,
}

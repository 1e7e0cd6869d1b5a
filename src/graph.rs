//! Graph model and the adjacency-matrix reader that feeds it.
//!
//! Grounded on `original_source/src/Graph.cpp::createEdges` (upper-triangle
//! scan, stable sort by weight) and
//! `original_source/src/SpanningTreesFinder.cpp::ReadAdjacencyMatrix` /
//! `helper.cpp::readInAdjMatrix` for the wire format, expressed the way
//! `toolbox_rs::io`/`toolbox_rs::dimacs` build small parsers on top of
//! `std::fs::read_to_string` plus `itertools`.

use std::fs;
use std::path::Path;

use itertools::Itertools;
use log::debug;

use crate::edge::Edge;
use crate::error::GraphError;

pub type VertexId = usize;
pub type Cost = u32;

/// An immutable, undirected, edge-weighted graph.
///
/// `edges` is sorted once at construction time, ascending by weight with a
/// stable tie-break on original scan order — every later algorithm relies
/// on this order never changing. The index of an edge in `edges` is its
/// canonical identifier throughout the crate.
#[derive(Debug, Clone)]
pub struct Graph {
    num_vertices: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds a graph from `num_vertices` and an unsorted edge list,
    /// sorting the edges by weight (stable).
    pub fn new(num_vertices: usize, mut edges: Vec<Edge>) -> Self {
        edges.sort_by_key(|e| e.w);
        Graph {
            num_vertices,
            edges,
        }
    }

    /// Builds a graph from the strict upper triangle of a square
    /// adjacency matrix; a zero entry means "no edge".
    pub fn from_adjacency_matrix(matrix: &[Vec<Cost>]) -> Result<Self, GraphError> {
        let n = matrix.len();
        if matrix.iter().any(|row| row.len() != n) {
            return Err(GraphError::InvalidInput(
                "adjacency matrix must be square".to_string(),
            ));
        }

        let mut edges = Vec::new();
        for row in 0..n {
            for col in (row + 1)..n {
                let w = matrix[row][col];
                if w != 0 {
                    edges.push(Edge::new(row, col, w));
                }
            }
        }
        debug!("built {} edges from a {n}x{n} adjacency matrix", edges.len());

        Ok(Self::new(n, edges))
    }

    /// Reads the whitespace-separated wire format: one integer `V`,
    /// followed by `V*V` integer tokens in row-major order. Entries are
    /// expected to be symmetric; only the strict upper triangle is read.
    pub fn read_adjacency_matrix_file<P: AsRef<Path>>(path: P) -> Result<Self, GraphError> {
        let text = fs::read_to_string(path.as_ref()).map_err(|e| {
            GraphError::InvalidInput(format!("cannot read {}: {e}", path.as_ref().display()))
        })?;
        Self::parse_adjacency_matrix(&text)
    }

    /// Parses the wire format described in [`Self::read_adjacency_matrix_file`]
    /// directly from a string.
    pub fn parse_adjacency_matrix(text: &str) -> Result<Self, GraphError> {
        let mut tokens = text.split_ascii_whitespace();

        let n: usize = tokens
            .next()
            .ok_or_else(|| GraphError::InvalidInput("missing vertex count".to_string()))?
            .parse()
            .map_err(|_| GraphError::InvalidInput("vertex count is not an integer".to_string()))?;

        let values: Vec<Cost> = tokens
            .map(|t| {
                t.parse::<Cost>()
                    .map_err(|_| GraphError::InvalidInput(format!("not an integer: {t}")))
            })
            .try_collect()?;

        if values.len() != n * n {
            return Err(GraphError::InvalidInput(format!(
                "expected {} matrix entries for V={n}, found {}",
                n * n,
                values.len()
            )));
        }

        let matrix: Vec<Vec<Cost>> = values.chunks(n).map(<[Cost]>::to_vec).collect();
        Self::from_adjacency_matrix(&matrix)
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_triangle_only_and_sorted_by_weight() {
        let matrix = vec![vec![0, 2, 0], vec![2, 0, 1], vec![0, 1, 0]];
        let g = Graph::from_adjacency_matrix(&matrix).unwrap();
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.edges()[0].w, 1);
        assert_eq!(g.edges()[1].w, 2);
    }

    #[test]
    fn rejects_non_square_matrix() {
        let matrix = vec![vec![0, 1], vec![1, 0], vec![0, 0]];
        let err = Graph::from_adjacency_matrix(&matrix).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidInput("adjacency matrix must be square".to_string())
        );
    }

    #[test]
    fn parses_wire_format() {
        let text = "3\n0 1 2\n1 0 3\n2 3 0\n";
        let g = Graph::parse_adjacency_matrix(text).unwrap();
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.num_edges(), 3);
    }

    #[test]
    fn wire_format_token_count_mismatch_is_invalid_input() {
        let text = "3\n0 1 2\n1 0 3\n";
        assert!(Graph::parse_adjacency_matrix(text).is_err());
    }

    #[test]
    fn zero_vertex_graph_is_valid_but_empty() {
        let g = Graph::from_adjacency_matrix(&[]).unwrap();
        assert_eq!(g.num_vertices(), 0);
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn reads_wire_format_from_disk() {
        use std::fs::File;
        use std::io::Write;
        use tempfile::tempdir;

        let dir = tempdir().unwrap();
        let file_path = dir.path().join("matrix.txt");
        let mut file = File::create(&file_path).unwrap();
        writeln!(file, "3").unwrap();
        writeln!(file, "0 1 2").unwrap();
        writeln!(file, "1 0 3").unwrap();
        writeln!(file, "2 3 0").unwrap();
        drop(file);

        let g = Graph::read_adjacency_matrix_file(&file_path).unwrap();
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.edges()[0].w, 1);
    }

    #[test]
    fn missing_file_is_invalid_input() {
        let err = Graph::read_adjacency_matrix_file("/nonexistent/path/matrix.txt").unwrap_err();
        assert!(matches!(err, GraphError::InvalidInput(_)));
    }
}

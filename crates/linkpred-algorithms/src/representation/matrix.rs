//! Adjacency matrix representation

use super::{GraphStore, Representation};
use crate::common::{EdgeList, GraphResult, VertexId};
use crate::index::VertexIndex;
use ndarray::Array2;
use std::collections::BTreeSet;

/// Dense V×V 0/1 matrix over dense ids.
///
/// Edge lookup is O(1), neighbour and degree queries O(V), space O(V²).
pub struct AdjacencyMatrixGraph {
    index: VertexIndex,
    matrix: Array2<u8>,
    /// Number of directed records written into the matrix
    records: usize,
}

impl AdjacencyMatrixGraph {
    pub fn from_edges(edges: &EdgeList) -> Self {
        let index = VertexIndex::build(edges.unique_vertices());
        let n = index.len();
        let mut matrix = Array2::<u8>::zeros((n, n));

        for &(u, v) in edges.records() {
            // Every endpoint comes from the same edge list as the index
            if let (Ok(i), Ok(j)) = (index.to_dense(u), index.to_dense(v)) {
                matrix[[i, j]] = 1;
            }
        }

        Self {
            index,
            matrix,
            records: edges.len(),
        }
    }
}

impl GraphStore for AdjacencyMatrixGraph {
    fn representation(&self) -> Representation {
        Representation::DenseMatrix
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.index.contains(vertex)
    }

    fn contains_edge(&self, u: VertexId, v: VertexId) -> GraphResult<bool> {
        let i = self.index.to_dense(u)?;
        let j = self.index.to_dense(v)?;
        Ok(self.matrix[[i, j]] == 1)
    }

    fn num_vertices(&self) -> usize {
        self.index.len()
    }

    fn num_edges(&self) -> usize {
        self.records / 2
    }

    fn vertex_set(&self) -> BTreeSet<VertexId> {
        self.index.vertices().iter().copied().collect()
    }

    fn neighbors(&self, vertex: VertexId) -> GraphResult<BTreeSet<VertexId>> {
        let row = self.index.to_dense(vertex)?;
        self.matrix
            .row(row)
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == 1)
            .map(|(col, _)| self.index.to_vertex(col))
            .collect()
    }

    fn degree(&self, vertex: VertexId) -> GraphResult<usize> {
        let row = self.index.to_dense(vertex)?;
        Ok(self.matrix.row(row).iter().filter(|&&cell| cell == 1).count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::representation::tests::triangle_with_tail;

    #[test]
    fn test_matrix_layout() {
        let graph = AdjacencyMatrixGraph::from_edges(&triangle_with_tail());

        // ids 1,2,3,4 -> dense 0..4
        assert_eq!(graph.matrix.dim(), (4, 4));
        assert_eq!(graph.matrix.sum(), 8);
        assert_eq!(graph.matrix[[2, 3]], 1);
        assert_eq!(graph.matrix[[3, 2]], 1);
        assert_eq!(graph.matrix[[0, 3]], 0);
    }

    #[test]
    fn test_target_only_vertex_is_indexed() {
        // 9 never appears as a source
        let edges = EdgeList::from_records(vec![(1, 9)]).unwrap();
        let graph = AdjacencyMatrixGraph::from_edges(&edges);

        assert!(graph.contains_vertex(9));
        assert!(graph.neighbors(9).unwrap().is_empty());
        assert!(graph.contains_edge(1, 9).unwrap());
        assert!(!graph.contains_edge(9, 1).unwrap());
    }
}

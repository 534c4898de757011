//! Compressed Sparse Row representation
//!
//! Variables:
//!   V          = number of vertices
//!   row_index  = prefix sum of per-vertex record counts, length V+1
//!   columns    = concatenated target dense ids, length = record count
//!
//! neighbours(i) = columns[ row_index[i] .. row_index[i+1] ]

use super::{GraphStore, Representation};
use crate::common::{EdgeList, GraphResult, VertexId};
use crate::index::VertexIndex;
use std::collections::BTreeSet;

/// CSR arrays over dense ids. Rows are sorted because the edge list is.
pub struct CsrGraph {
    index: VertexIndex,
    row_index: Vec<usize>,
    columns: Vec<usize>,
}

impl CsrGraph {
    pub fn from_edges(edges: &EdgeList) -> Self {
        let index = VertexIndex::build(edges.unique_vertices());
        let n = index.len();

        // Count records per source, then prefix sum into offsets
        let mut row_index = vec![0usize; n + 1];
        let mut columns = Vec::with_capacity(edges.len());
        for &(u, v) in edges.records() {
            if let (Ok(i), Ok(j)) = (index.to_dense(u), index.to_dense(v)) {
                row_index[i + 1] += 1;
                columns.push(j);
            }
        }
        for i in 0..n {
            row_index[i + 1] += row_index[i];
        }

        Self {
            index,
            row_index,
            columns,
        }
    }

    /// Target dense ids of a row
    fn row(&self, idx: usize) -> &[usize] {
        let start = self.row_index[idx];
        let end = self.row_index[idx + 1];
        &self.columns[start..end]
    }
}

impl GraphStore for CsrGraph {
    fn representation(&self) -> Representation {
        Representation::CompressedRows
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.index.contains(vertex)
    }

    fn contains_edge(&self, u: VertexId, v: VertexId) -> GraphResult<bool> {
        let i = self.index.to_dense(u)?;
        let j = self.index.to_dense(v)?;
        Ok(self.row(i).binary_search(&j).is_ok())
    }

    fn num_vertices(&self) -> usize {
        self.index.len()
    }

    fn num_edges(&self) -> usize {
        self.columns.len() / 2
    }

    fn vertex_set(&self) -> BTreeSet<VertexId> {
        self.index.vertices().iter().copied().collect()
    }

    fn neighbors(&self, vertex: VertexId) -> GraphResult<BTreeSet<VertexId>> {
        let idx = self.index.to_dense(vertex)?;
        self.row(idx)
            .iter()
            .map(|&col| self.index.to_vertex(col))
            .collect()
    }

    fn degree(&self, vertex: VertexId) -> GraphResult<usize> {
        let idx = self.index.to_dense(vertex)?;
        Ok(self.row_index[idx + 1] - self.row_index[idx])
    }
}

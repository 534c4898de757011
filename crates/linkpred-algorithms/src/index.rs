//! Dense vertex numbering
//!
//! Maps arbitrary vertex identifiers to dense indices (0..V) and back.

use super::common::{GraphError, GraphResult, VertexId};
use rustc_hash::FxHashMap;

/// Bijection between vertex identifiers and dense ids, in ascending
/// identifier order.
#[derive(Debug, Clone, Default)]
pub struct VertexIndex {
    /// Mapping from dense index (0..V) back to VertexId
    index_to_vertex: Vec<VertexId>,
    /// Mapping from VertexId to dense index
    vertex_to_index: FxHashMap<VertexId, usize>,
}

impl VertexIndex {
    /// Build from sorted unique identifiers.
    ///
    /// Unsorted or repeated input is sorted and deduplicated first so the
    /// bijection always holds.
    pub fn build(vertices: impl IntoIterator<Item = VertexId>) -> Self {
        let mut index_to_vertex: Vec<VertexId> = vertices.into_iter().collect();
        if !index_to_vertex.windows(2).all(|w| w[0] < w[1]) {
            index_to_vertex.sort_unstable();
            index_to_vertex.dedup();
        }

        let mut vertex_to_index =
            FxHashMap::with_capacity_and_hasher(index_to_vertex.len(), Default::default());
        for (idx, &vertex) in index_to_vertex.iter().enumerate() {
            vertex_to_index.insert(vertex, idx);
        }

        Self {
            index_to_vertex,
            vertex_to_index,
        }
    }

    pub fn len(&self) -> usize {
        self.index_to_vertex.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_to_vertex.is_empty()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.vertex_to_index.contains_key(&vertex)
    }

    pub fn to_dense(&self, vertex: VertexId) -> GraphResult<usize> {
        self.vertex_to_index
            .get(&vertex)
            .copied()
            .ok_or(GraphError::UnknownVertex(vertex))
    }

    pub fn to_vertex(&self, idx: usize) -> GraphResult<VertexId> {
        self.index_to_vertex
            .get(idx)
            .copied()
            .ok_or(GraphError::DenseIdOutOfRange(idx))
    }

    /// Identifiers in dense id order
    pub fn vertices(&self) -> &[VertexId] {
        &self.index_to_vertex
    }
}

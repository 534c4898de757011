//! Adjacency set representation

use super::{GraphStore, Representation};
use crate::common::{EdgeList, GraphError, GraphResult, VertexId};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;

/// Hash map from each record source to the set of its recorded targets.
///
/// Only the directions present in the input are stored. `contains_edge(u, v)`
/// probes `u` in the set of `v`, which matches the other representations only
/// when the edge list is symmetric. Vertices that never appear as a source
/// are not part of this graph.
pub struct AdjacencySetGraph {
    adjacency: FxHashMap<VertexId, FxHashSet<VertexId>>,
}

impl AdjacencySetGraph {
    pub fn from_edges(edges: &EdgeList) -> Self {
        let mut adjacency: FxHashMap<VertexId, FxHashSet<VertexId>> = FxHashMap::default();
        for &(u, v) in edges.records() {
            adjacency.entry(u).or_default().insert(v);
        }
        Self { adjacency }
    }

    fn recorded(&self, vertex: VertexId) -> GraphResult<&FxHashSet<VertexId>> {
        self.adjacency
            .get(&vertex)
            .ok_or(GraphError::UnknownVertex(vertex))
    }
}

impl GraphStore for AdjacencySetGraph {
    fn representation(&self) -> Representation {
        Representation::AdjacencySet
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    fn contains_edge(&self, u: VertexId, v: VertexId) -> GraphResult<bool> {
        self.recorded(u)?;
        Ok(self.recorded(v)?.contains(&u))
    }

    fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    fn num_edges(&self) -> usize {
        self.adjacency.values().map(|targets| targets.len()).sum::<usize>() / 2
    }

    fn vertex_set(&self) -> BTreeSet<VertexId> {
        self.adjacency.keys().copied().collect()
    }

    fn neighbors(&self, vertex: VertexId) -> GraphResult<BTreeSet<VertexId>> {
        Ok(self.recorded(vertex)?.iter().copied().collect())
    }

    fn degree(&self, vertex: VertexId) -> GraphResult<usize> {
        Ok(self.recorded(vertex)?.len())
    }
}

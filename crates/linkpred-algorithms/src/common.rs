//! Shared types for the link prediction core
//!
//! Provides the vertex identifier type, the error type and the canonical
//! edge list every graph representation is built from.

use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Vertex identifier type (u64)
pub type VertexId = u64;

/// Errors that can occur while building or querying a graph
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Malformed dataset: {0}")]
    MalformedDataset(String),

    #[error("Vertex {0} not found")]
    UnknownVertex(VertexId),

    #[error("Dense id {0} out of range")]
    DenseIdOutOfRange(usize),

    #[error("Degenerate neighbour {0}: degree <= 1 gives log(degree) = 0")]
    DegenerateNeighbor(VertexId),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// An unordered vertex pair, stored as `(low, high)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexPair {
    pub low: VertexId,
    pub high: VertexId,
}

impl VertexPair {
    /// Normalize two distinct endpoints into a pair
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            VertexPair { low: a, high: b }
        } else {
            VertexPair { low: b, high: a }
        }
    }
}

impl fmt::Display for VertexPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}

/// Canonical edge list: sorted by `(source, target)`, no self-loops, no
/// duplicate records.
///
/// Each record is a directed `(source, target)` entry. An undirected graph
/// is expected to carry both `(u, v)` and `(v, u)`; see [`EdgeList::is_symmetric`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    records: Vec<(VertexId, VertexId)>,
}

impl EdgeList {
    /// Validate, sort and deduplicate raw records
    pub fn from_records(mut records: Vec<(VertexId, VertexId)>) -> GraphResult<Self> {
        if let Some(&(u, _)) = records.iter().find(|(u, v)| u == v) {
            return Err(GraphError::MalformedDataset(format!(
                "record ({u}, {u}) is not a pair of distinct vertices"
            )));
        }

        records.sort_unstable();
        let before = records.len();
        records.dedup();
        if records.len() < before {
            debug!("Dropped {} duplicate edge records", before - records.len());
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[(VertexId, VertexId)] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted unique identifiers appearing as either source or target
    pub fn unique_vertices(&self) -> Vec<VertexId> {
        let mut vertices: Vec<VertexId> = self
            .records
            .iter()
            .flat_map(|&(u, v)| [u, v])
            .collect();
        vertices.sort_unstable();
        vertices.dedup();
        vertices
    }

    /// True when every record `(u, v)` has its mirror `(v, u)`
    pub fn is_symmetric(&self) -> bool {
        self.records
            .iter()
            .all(|&(u, v)| self.records.binary_search(&(v, u)).is_ok())
    }

    /// Copy of this list with every missing mirror record added
    pub fn symmetrized(&self) -> Self {
        let mut records = Vec::with_capacity(self.records.len() * 2);
        for &(u, v) in &self.records {
            records.push((u, v));
            records.push((v, u));
        }
        records.sort_unstable();
        records.dedup();
        Self { records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_list_sorts_and_dedups() {
        let edges = EdgeList::from_records(vec![(3, 1), (1, 2), (3, 1), (1, 0)]).unwrap();
        assert_eq!(edges.records(), &[(1, 0), (1, 2), (3, 1)]);
        assert_eq!(edges.unique_vertices(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_edge_list_rejects_self_loop() {
        let result = EdgeList::from_records(vec![(1, 2), (4, 4)]);
        assert!(matches!(result, Err(GraphError::MalformedDataset(_))));
    }

    #[test]
    fn test_symmetry() {
        let edges = EdgeList::from_records(vec![(1, 2), (2, 3), (3, 2)]).unwrap();
        assert!(!edges.is_symmetric());

        let sym = edges.symmetrized();
        assert!(sym.is_symmetric());
        assert_eq!(sym.records(), &[(1, 2), (2, 1), (2, 3), (3, 2)]);
    }

    #[test]
    fn test_pair_normalizes_order() {
        assert_eq!(VertexPair::new(9, 4), VertexPair::new(4, 9));
        assert_eq!(VertexPair::new(9, 4).to_string(), "(4, 9)");
    }
}

//! Graph storage representations
//!
//! Three interchangeable layouts answer the same read-only query contract:
//! - [`AdjacencyMatrixGraph`]: dense V×V 0/1 matrix
//! - [`AdjacencySetGraph`]: hash map from vertex to its recorded neighbours
//! - [`CsrGraph`]: Compressed Sparse Row arrays over dense ids
//!
//! All of them are built once from an [`EdgeList`] and never mutated.

mod adjacency;
mod csr;
mod matrix;

pub use adjacency::AdjacencySetGraph;
pub use csr::CsrGraph;
pub use matrix::AdjacencyMatrixGraph;

use crate::common::{EdgeList, GraphError, GraphResult, VertexId};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

/// Read-only query contract shared by every representation.
///
/// For a symmetric edge list every method returns identical results
/// regardless of the representation behind it.
pub trait GraphStore: Send + Sync {
    /// Which layout backs this store
    fn representation(&self) -> Representation;

    fn contains_vertex(&self, vertex: VertexId) -> bool;

    /// Edge membership. Fails with `UnknownVertex` if either endpoint is absent.
    fn contains_edge(&self, u: VertexId, v: VertexId) -> GraphResult<bool>;

    fn num_vertices(&self) -> usize;

    /// Undirected edge count: directed records / 2
    fn num_edges(&self) -> usize;

    /// All vertex identifiers, ascending
    fn vertex_set(&self) -> BTreeSet<VertexId>;

    /// Vertices adjacent to `vertex`; empty for an isolated vertex
    fn neighbors(&self, vertex: VertexId) -> GraphResult<BTreeSet<VertexId>>;

    /// Equals `neighbors(vertex).len()`
    fn degree(&self, vertex: VertexId) -> GraphResult<usize> {
        Ok(self.neighbors(vertex)?.len())
    }
}

/// Representation selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Representation {
    DenseMatrix,
    AdjacencySet,
    CompressedRows,
}

impl Representation {
    pub const ALL: [Representation; 3] = [
        Representation::DenseMatrix,
        Representation::AdjacencySet,
        Representation::CompressedRows,
    ];

    /// Build a store of this representation from the canonical edge list
    pub fn build(self, edges: &EdgeList) -> Box<dyn GraphStore> {
        if !edges.is_symmetric() {
            warn!(
                "Edge list is not symmetric; {} results may differ from the other representations",
                Representation::AdjacencySet
            );
        }

        let store: Box<dyn GraphStore> = match self {
            Representation::DenseMatrix => Box::new(AdjacencyMatrixGraph::from_edges(edges)),
            Representation::AdjacencySet => Box::new(AdjacencySetGraph::from_edges(edges)),
            Representation::CompressedRows => Box::new(CsrGraph::from_edges(edges)),
        };

        info!(
            "Built {} graph: {} vertices, {} edges",
            self,
            store.num_vertices(),
            store.num_edges()
        );
        store
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Representation::DenseMatrix => "AM",
            Representation::AdjacencySet => "AL",
            Representation::CompressedRows => "CSR",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Representation {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "am" | "matrix" | "dense" | "dense_matrix" => Ok(Representation::DenseMatrix),
            "al" | "list" | "set" | "adjacency" | "adjacency_set" => {
                Ok(Representation::AdjacencySet)
            }
            "csr" | "compressed" | "compressed_rows" => Ok(Representation::CompressedRows),
            other => Err(GraphError::InvalidConfiguration(format!(
                "unknown graph representation '{}' (expected AM, AL or CSR)",
                other
            ))),
        }
    }
}

impl TryFrom<String> for Representation {
    type Error = GraphError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Representation> for String {
    fn from(repr: Representation) -> Self {
        repr.to_string()
    }
}

pub mod common;
pub mod index;
pub mod representation;
pub mod similarity;
pub mod topk;
pub mod engine;

pub use common::{EdgeList, GraphError, GraphResult, VertexId, VertexPair};
pub use index::VertexIndex;
pub use representation::{
    AdjacencyMatrixGraph, AdjacencySetGraph, CsrGraph, GraphStore, Representation,
};
pub use similarity::{adamic_adar, common_neighbors, jaccard, DegeneratePolicy, Metric};
pub use topk::{ScoredPair, TopK, TopKSelector};
pub use engine::{top_k_links, EngineConfig, LinkPredictor, ScanStats};

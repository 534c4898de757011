//! Top-k link prediction
//!
//! Estimates which non-adjacent vertex pairs of an undirected graph are most
//! likely to become edges, ranked by a neighbourhood similarity metric.
//!
//! # Architecture
//!
//! - `linkpred-algorithms`: vertex index, the three graph representations
//!   (dense matrix, adjacency sets, CSR), similarity metrics, bounded top-k
//!   selection and the pairwise scan engine
//! - this crate: dataset loading, configuration and the timed pipeline
//!
//! ## Example Usage
//!
//! ```rust
//! use linkpred::{run_prediction, PredictionConfig};
//! use linkpred::algo::{EdgeList, Metric, Representation};
//! use std::time::Instant;
//!
//! let edges = EdgeList::from_records(vec![(1, 2), (2, 3), (1, 3), (3, 4)])
//!     .unwrap()
//!     .symmetrized();
//!
//! let config = PredictionConfig {
//!     representation: Representation::CompressedRows,
//!     metric: Metric::CommonNeighbors,
//!     k: 1,
//!     ..PredictionConfig::default()
//! };
//!
//! let report = run_prediction(&edges, &config, Instant::now()).unwrap();
//! assert_eq!(report.ranking.entries()[0].score, 1.0);
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod pipeline;

/// Re-export of the algorithmic core
pub use linkpred_algorithms as algo;

pub use config::PredictionConfig;
pub use dataset::{load_edge_list, parse_edge_list};
pub use error::{PredictionError, PredictionResult};
pub use pipeline::{predict_from_file, run_prediction, GraphSummary, PredictionReport};

/// Crate version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

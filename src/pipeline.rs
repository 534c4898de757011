//! Prediction pipeline
//!
//! Builds the configured representation from an edge list, runs the top-k
//! scan and reports the ranking with timings. The caller supplies the start
//! instant so no clock state lives in the library.

use crate::config::PredictionConfig;
use crate::dataset::load_edge_list;
use crate::error::PredictionResult;
use linkpred_algorithms::{EdgeList, LinkPredictor, ScanStats, TopK};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Size of the graph the prediction ran on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub vertices: usize,
    pub edges: usize,
}

/// Outcome of one prediction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    pub config: PredictionConfig,
    pub graph: GraphSummary,
    pub stats: ScanStats,
    pub ranking: TopK,
    /// Time spent building the graph representation
    pub build_time: Duration,
    /// Time spent enumerating and scoring pairs
    pub scoring_time: Duration,
    /// Time since the caller's start instant
    pub elapsed: Duration,
}

impl PredictionReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Run a prediction over an already loaded edge list
pub fn run_prediction(
    edges: &EdgeList,
    config: &PredictionConfig,
    started: Instant,
) -> PredictionResult<PredictionReport> {
    config.validate()?;

    let edges = if config.symmetrize {
        info!("Symmetrizing {} edge records", edges.len());
        Cow::Owned(edges.symmetrized())
    } else {
        Cow::Borrowed(edges)
    };

    let build_start = Instant::now();
    let graph = config.representation.build(&edges);
    let build_time = build_start.elapsed();

    let scoring_start = Instant::now();
    let predictor = LinkPredictor::new(config.engine_config());
    let (ranking, stats) = predictor.predict_with_stats(graph.as_ref())?;
    let scoring_time = scoring_start.elapsed();

    info!(
        "Prediction finished: build {:?}, scoring {:?}",
        build_time, scoring_time
    );

    Ok(PredictionReport {
        config: config.clone(),
        graph: GraphSummary {
            vertices: graph.num_vertices(),
            edges: graph.num_edges(),
        },
        stats,
        ranking,
        build_time,
        scoring_time,
        elapsed: started.elapsed(),
    })
}

/// Load a dataset file and run a prediction over it
pub fn predict_from_file(
    path: impl AsRef<Path>,
    config: &PredictionConfig,
    started: Instant,
) -> PredictionResult<PredictionReport> {
    let edges = load_edge_list(path)?;
    run_prediction(&edges, config, started)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredictionError;
    use linkpred_algorithms::{GraphError, Metric, Representation, VertexPair};

    fn directed_triangle_with_tail() -> EdgeList {
        EdgeList::from_records(vec![(1, 2), (2, 3), (1, 3), (3, 4)]).unwrap()
    }

    #[test]
    fn test_run_prediction_with_symmetrize() {
        let config = PredictionConfig {
            representation: Representation::AdjacencySet,
            k: 1,
            symmetrize: true,
            ..PredictionConfig::default()
        };
        let report = run_prediction(&directed_triangle_with_tail(), &config, Instant::now()).unwrap();

        assert_eq!(report.graph, GraphSummary { vertices: 4, edges: 4 });
        assert_eq!(report.ranking.entries()[0].pair, VertexPair::new(1, 4));
        assert!(report.elapsed >= report.scoring_time);
    }

    #[test]
    fn test_report_serializes() {
        let config = PredictionConfig {
            metric: Metric::Jaccard,
            k: 2,
            symmetrize: true,
            ..PredictionConfig::default()
        };
        let report = run_prediction(&directed_triangle_with_tail(), &config, Instant::now()).unwrap();
        let json = report.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["config"]["metric"], "jaccard");
        assert_eq!(value["ranking"]["entries"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_config_is_rejected_before_building() {
        let config = PredictionConfig {
            k: 0,
            ..PredictionConfig::default()
        };
        let result = run_prediction(&directed_triangle_with_tail(), &config, Instant::now());
        assert!(matches!(
            result,
            Err(PredictionError::Graph(GraphError::InvalidConfiguration(_)))
        ));
    }
}

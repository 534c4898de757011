//! Prediction configuration
//!
//! Selects the graph representation, the similarity metric and k. Values can
//! come from a YAML file and be overridden by command-line flags.

use crate::error::PredictionResult;
use linkpred_algorithms::{DegeneratePolicy, EngineConfig, GraphError, Metric, Representation};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for one prediction run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Storage layout the graph is built into
    pub representation: Representation,
    /// Similarity metric
    pub metric: Metric,
    /// Number of top-ranked pairs to return
    pub k: usize,
    /// Worker threads (None = all cores)
    pub threads: Option<usize>,
    /// Adamic/Adar handling of degree <= 1 common neighbours
    pub degenerate: DegeneratePolicy,
    /// Add the mirror of every edge record before building the graph
    pub symmetrize: bool,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            representation: Representation::CompressedRows,
            metric: Metric::CommonNeighbors,
            k: 10,
            threads: None,
            degenerate: DegeneratePolicy::Skip,
            symmetrize: false,
        }
    }
}

impl PredictionConfig {
    /// Parse a YAML document; missing keys take their defaults
    pub fn from_yaml_str(yaml: &str) -> PredictionResult<Self> {
        let config: PredictionConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> PredictionResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), GraphError> {
        if self.k == 0 {
            return Err(GraphError::InvalidConfiguration(
                "k must be a positive integer".to_string(),
            ));
        }
        if self.threads == Some(0) {
            return Err(GraphError::InvalidConfiguration(
                "thread count must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Engine settings derived from this configuration
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            metric: self.metric,
            k: self.k,
            threads: self.threads,
            degenerate: self.degenerate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredictionError;

    #[test]
    fn test_yaml_overrides_defaults() {
        let yaml = "representation: dense_matrix\nmetric: adamic_adar\nk: 25\ndegenerate: fail\n";
        let config = PredictionConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.representation, Representation::DenseMatrix);
        assert_eq!(config.metric, Metric::AdamicAdar);
        assert_eq!(config.k, 25);
        assert_eq!(config.degenerate, DegeneratePolicy::Fail);
        assert_eq!(config.threads, None);
        assert!(!config.symmetrize);
    }

    #[test]
    fn test_yaml_accepts_command_line_names() {
        let yaml = "representation: AM\nmetric: adamic-adar\n";
        let config = PredictionConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.representation, Representation::DenseMatrix);
        assert_eq!(config.metric, Metric::AdamicAdar);

        let config = PredictionConfig::from_yaml_str("representation: al\nmetric: neighbors\n").unwrap();
        assert_eq!(config.representation, Representation::AdjacencySet);
        assert_eq!(config.metric, Metric::CommonNeighbors);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = PredictionConfig {
            representation: Representation::CompressedRows,
            metric: Metric::Jaccard,
            ..PredictionConfig::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(PredictionConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_rejects_zero_k() {
        let result = PredictionConfig::from_yaml_str("k: 0\n");
        assert!(matches!(
            result,
            Err(PredictionError::Graph(GraphError::InvalidConfiguration(_)))
        ));
    }

    #[test]
    fn test_rejects_unknown_metric() {
        let result = PredictionConfig::from_yaml_str("metric: cosine\n");
        assert!(matches!(result, Err(PredictionError::Config(_))));
    }

    #[test]
    fn test_engine_config() {
        let config = PredictionConfig {
            k: 3,
            threads: Some(2),
            ..PredictionConfig::default()
        };
        let engine = config.engine_config();
        assert_eq!(engine.k, 3);
        assert_eq!(engine.threads, Some(2));
        assert_eq!(engine.metric, Metric::CommonNeighbors);
    }
}

//! Error types for the prediction pipeline

use linkpred_algorithms::GraphError;
use thiserror::Error;

/// Errors that can occur while loading, configuring or running a prediction
#[derive(Error, Debug)]
pub enum PredictionError {
    /// Dataset, query or configuration error from the graph core
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Configuration file error: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type PredictionResult<T> = Result<T, PredictionError>;

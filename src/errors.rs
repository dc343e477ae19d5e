use thiserror::Error;

use crate::engine::adapter::EngineError;

#[derive(Debug, Error)]
pub enum DispersionError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Engine error: {0}")]
    EngineError(#[from] EngineError),

    #[error("Engine error: trial {trial}: {source}")]
    TrialError {
        trial: usize,
        #[source]
        source: EngineError,
    },

    #[error("Aggregation error: {0}")]
    AggregationError(String),
}

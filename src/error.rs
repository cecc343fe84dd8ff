//! Error types for the strategy library

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StrategyError {
    /// Every quadrant was excluded from a random pick
    #[error("no quadrant left to choose from")]
    NoQuadrantAvailable,

    #[error("failed to load settings from {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("malformed record: {0}")]
    Protocol(#[from] serde_json::Error),
}

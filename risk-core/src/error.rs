//! Error handling

use std::path::PathBuf;
use thiserror::Error;

pub type RiskResult<T> = Result<T, RiskError>;

#[derive(Debug, Error)]
pub enum RiskError {
    // Training input errors
    #[error("Dataset not found: {}", .0.display())]
    DatasetMissing(PathBuf),

    #[error("Dataset parse error: {0}")]
    DatasetParse(#[from] csv::Error),

    #[error("Dataset is empty: {}", .0.display())]
    EmptyDataset(PathBuf),

    // Model errors
    #[error("Model bundle not found: {}", .0.display())]
    BundleMissing(PathBuf),

    #[error("Training failed: {0}")]
    Training(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Unknown class code from verdict model: {0}")]
    UnknownLabel(i32),

    #[error(
        "Feature layout mismatch: expected v{expected_version} (hash: {expected_hash:08x}), got v{actual_version} (hash: {actual_hash:08x})"
    )]
    LayoutMismatch {
        expected_version: u8,
        expected_hash: u32,
        actual_version: u8,
        actual_hash: u32,
    },

    // Request errors
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    // Persistence errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<smartcore::error::Failed> for RiskError {
    fn from(err: smartcore::error::Failed) -> Self {
        RiskError::Inference(err.to_string())
    }
}

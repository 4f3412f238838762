//! Prediction models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use risk_core::constants::UNKNOWN_VERDICT;
use risk_core::{ModelBundle, Prediction};

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub risk_score: i64,
    pub verdict: String,
}

impl From<Prediction> for PredictResponse {
    fn from(p: Prediction) -> Self {
        Self {
            risk_score: p.risk_score,
            verdict: p.verdict,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub risk_score: i64,
    pub verdict: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            risk_score: 0,
            verdict: UNKNOWN_VERDICT.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ModelInfoResponse {
    pub feature_version: u8,
    pub layout_hash: u32,
    pub feature_names: Vec<String>,
    pub trained_at: DateTime<Utc>,
    pub sample_count: usize,
    pub n_trees: u16,
    pub content_types: Vec<String>,
    pub content_type_fallback: String,
    pub sender_reputations: Vec<String>,
    pub sender_reputation_fallback: String,
    pub verdicts: Vec<String>,
}

impl From<&ModelBundle> for ModelInfoResponse {
    fn from(bundle: &ModelBundle) -> Self {
        let meta = &bundle.metadata;
        Self {
            feature_version: meta.layout.version,
            layout_hash: meta.layout.hash,
            feature_names: meta.layout.feature_names.clone(),
            trained_at: meta.trained_at,
            sample_count: meta.sample_count,
            n_trees: meta.n_trees,
            content_types: bundle.content_type_encoder.classes().to_vec(),
            content_type_fallback: bundle.content_type_encoder.fallback().to_string(),
            sender_reputations: bundle.sender_reputation_encoder.classes().to_vec(),
            sender_reputation_fallback: bundle.sender_reputation_encoder.fallback().to_string(),
            verdicts: bundle.verdict_labels.classes().to_vec(),
        }
    }
}

//! Model Bundle - encoders + both forests, persisted as one artifact

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_classifier::RandomForestClassifier;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::RiskResult;
use crate::logic::encoder::{CategoryEncoder, LabelEncoder};
use crate::logic::features::layout::{validate_layout, LayoutInfo};
use crate::logic::features::FeatureExtractor;

/// Risk score regressor
pub type ScoreModel = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Verdict forest, fit on verdict label codes
pub type VerdictForest = RandomForestClassifier<f64, i32, DenseMatrix<f64>, Vec<i32>>;

/// Verdict model. A dataset with a single verdict label has nothing for a
/// forest to separate, so every item gets that label's code.
#[derive(Serialize, Deserialize)]
pub enum VerdictModel {
    Forest(VerdictForest),
    Constant(i32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleMetadata {
    pub layout: LayoutInfo,
    pub trained_at: DateTime<Utc>,
    pub sample_count: usize,
    pub n_trees: u16,
    pub seed: u64,
}

#[derive(Serialize, Deserialize)]
pub struct ModelBundle {
    pub metadata: BundleMetadata,
    pub content_type_encoder: CategoryEncoder,
    pub sender_reputation_encoder: CategoryEncoder,
    pub verdict_labels: LabelEncoder,
    pub(crate) score_model: ScoreModel,
    pub(crate) verdict_model: VerdictModel,
}

impl ModelBundle {
    /// Refuse bundles trained against another feature layout
    pub fn validate(&self) -> RiskResult<()> {
        validate_layout(self.metadata.layout.version, self.metadata.layout.hash)
    }

    /// Extractor bound to this bundle's vocabularies
    pub fn extractor(&self) -> FeatureExtractor<'_> {
        FeatureExtractor::new(&self.content_type_encoder, &self.sender_reputation_encoder)
    }
}

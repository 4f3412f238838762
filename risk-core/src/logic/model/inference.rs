//! Inference - run both forests over one feature vector

use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::{RiskError, RiskResult};
use crate::logic::features::{ContentItem, FeatureVector};
use super::bundle::{ModelBundle, VerdictModel};

/// Prediction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub risk_score: i64,
    pub verdict: String,
}

/// Round half to even, matching the training pipeline's rounding
pub fn round_score(raw: f64) -> i64 {
    raw.round_ties_even() as i64
}

impl ModelBundle {
    pub fn predict(&self, features: &FeatureVector) -> RiskResult<Prediction> {
        let x = DenseMatrix::from_2d_vec(&vec![features.to_vec()]);

        let raw_score = self
            .score_model
            .predict(&x)?
            .first()
            .copied()
            .ok_or_else(|| RiskError::Inference("score model returned no output".to_string()))?;

        let class = match &self.verdict_model {
            VerdictModel::Forest(forest) => forest
                .predict(&x)?
                .first()
                .copied()
                .ok_or_else(|| RiskError::Inference("verdict model returned no output".to_string()))?,
            VerdictModel::Constant(class) => *class,
        };

        let verdict = u32::try_from(class)
            .ok()
            .and_then(|code| self.verdict_labels.decode(code))
            .ok_or(RiskError::UnknownLabel(class))?;

        Ok(Prediction {
            risk_score: round_score(raw_score),
            verdict: verdict.to_string(),
        })
    }

    /// Extract features from `item` and predict
    pub fn predict_item(&self, item: &ContentItem) -> RiskResult<Prediction> {
        let features = self.extractor().extract(item);
        log::debug!("Features: {}", features.to_log_entry());
        self.predict(&features)
    }
}

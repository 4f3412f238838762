//! Service context - the loaded model bundle, immutable after startup
//!
//! `Ready` serves predictions. `Degraded` answers every prediction with
//! `ModelsNotLoaded` and never touches a model. Only a restart moves
//! between the two.

use std::path::Path;

use risk_core::{load_bundle, ContentItem, ModelBundle, Prediction, RiskError};

use crate::error::{AppError, AppResult};

pub enum ServiceContext {
    Ready(ModelBundle),
    Degraded { reason: String },
}

impl ServiceContext {
    /// Load the bundle once; any failure leaves the service degraded
    pub fn load(path: &Path) -> Self {
        match load_bundle(path) {
            Ok(bundle) => {
                tracing::info!(
                    "Models loaded successfully ({} samples, {} trees)",
                    bundle.metadata.sample_count,
                    bundle.metadata.n_trees
                );
                ServiceContext::Ready(bundle)
            }
            Err(RiskError::BundleMissing(path)) => {
                tracing::error!(
                    "{} not found. Run the trainer first; serving in degraded mode.",
                    path.display()
                );
                ServiceContext::Degraded {
                    reason: format!("{} not found", path.display()),
                }
            }
            Err(e) => {
                tracing::error!("Failed to load models: {}; serving in degraded mode.", e);
                ServiceContext::Degraded {
                    reason: e.to_string(),
                }
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ServiceContext::Ready(_))
    }

    pub fn degraded_reason(&self) -> Option<&str> {
        match self {
            ServiceContext::Ready(_) => None,
            ServiceContext::Degraded { reason } => Some(reason.as_str()),
        }
    }

    pub fn bundle(&self) -> AppResult<&ModelBundle> {
        match self {
            ServiceContext::Ready(bundle) => Ok(bundle),
            ServiceContext::Degraded { .. } => Err(AppError::ModelsNotLoaded),
        }
    }

    /// Score one raw request body
    pub fn predict(&self, body: &[u8]) -> AppResult<Prediction> {
        let bundle = self.bundle()?;

        tracing::debug!("Received request: {}", String::from_utf8_lossy(body));

        let item = ContentItem::from_slice(body)?;
        let prediction = bundle.predict_item(&item)?;

        tracing::debug!(
            risk_score = prediction.risk_score,
            verdict = %prediction.verdict,
            "Prediction served"
        );
        Ok(prediction)
    }
}

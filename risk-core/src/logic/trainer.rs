//! Trainer - fit encoders and both forests, produce a bundle
//!
//! Regressor and classifier see the same feature matrix but are fit
//! independently against their own targets.

use std::path::Path;

use chrono::Utc;
use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::constants::{self, FALLBACK_CONTENT_TYPE, FALLBACK_SENDER_REPUTATION};
use crate::error::{RiskError, RiskResult};
use crate::logic::dataset::{load_dataset, TrainingRecord};
use crate::logic::encoder::{CategoryEncoder, LabelEncoder};
use crate::logic::features::{FeatureVector, LayoutInfo};
use crate::logic::model::{save_bundle, BundleMetadata, ModelBundle, VerdictModel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    pub n_trees: u16,
    pub seed: u64,
}

impl TrainingConfig {
    pub fn from_env() -> Self {
        Self {
            n_trees: constants::get_n_trees(),
            seed: constants::get_seed(),
        }
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            n_trees: constants::DEFAULT_N_TREES,
            seed: constants::DEFAULT_SEED,
        }
    }
}

/// Load `dataset`, train, and write the bundle to `output`.
///
/// Nothing is written unless training succeeds.
pub fn run(dataset: &Path, output: &Path, config: &TrainingConfig) -> RiskResult<ModelBundle> {
    let records = load_dataset(dataset)?;
    let bundle = train(&records, config)?;
    save_bundle(&bundle, output)?;
    Ok(bundle)
}

pub fn train(records: &[TrainingRecord], config: &TrainingConfig) -> RiskResult<ModelBundle> {
    if records.is_empty() {
        return Err(RiskError::Training("no training records".to_string()));
    }

    let content_type_encoder = CategoryEncoder::fit_with_fallback(
        records.iter().map(|r| &r.content_type),
        FALLBACK_CONTENT_TYPE,
    );
    let sender_reputation_encoder = CategoryEncoder::fit_with_fallback(
        records.iter().map(|r| &r.sender_reputation),
        FALLBACK_SENDER_REPUTATION,
    );
    let verdict_labels = LabelEncoder::fit(records.iter().map(|r| &r.verdict));

    log::info!("content_type classes: {:?}", content_type_encoder.classes());
    log::info!("sender_reputation classes: {:?}", sender_reputation_encoder.classes());
    log::info!("verdict classes: {:?}", verdict_labels.classes());

    let rows: Vec<Vec<f64>> = records
        .iter()
        .map(|r| {
            FeatureVector::new(
                content_type_encoder.encode_or_fallback(&r.content_type),
                r.domain_age_days,
                sender_reputation_encoder.encode_or_fallback(&r.sender_reputation),
                r.num_social_eng_indicators as usize,
                r.num_tech_indicators as usize,
            )
            .to_vec()
        })
        .collect();
    let x = DenseMatrix::from_2d_vec(&rows);

    let y_score: Vec<f64> = records.iter().map(|r| r.risk_score).collect();
    let y_verdict: Vec<i32> = records
        .iter()
        .map(|r| {
            verdict_labels
                .encode(&r.verdict)
                .map(|code| code as i32)
                .ok_or_else(|| RiskError::Training(format!("unencodable verdict {:?}", r.verdict)))
        })
        .collect::<RiskResult<_>>()?;

    log::info!("Training risk score regressor ({} trees)...", config.n_trees);
    let score_params = RandomForestRegressorParameters::default()
        .with_n_trees(config.n_trees.into())
        .with_seed(config.seed);
    let score_model = RandomForestRegressor::fit(&x, &y_score, score_params)
        .map_err(|e| RiskError::Training(format!("score regressor: {}", e)))?;

    let verdict_model = match verdict_labels.classes() {
        [only] => {
            log::warn!("Single verdict class {:?} in dataset, verdict is constant", only);
            VerdictModel::Constant(0)
        }
        _ => {
            log::info!("Training verdict classifier ({} trees)...", config.n_trees);
            let verdict_params = RandomForestClassifierParameters::default()
                .with_n_trees(config.n_trees.into())
                .with_seed(config.seed);
            let forest = RandomForestClassifier::fit(&x, &y_verdict, verdict_params)
                .map_err(|e| RiskError::Training(format!("verdict classifier: {}", e)))?;
            VerdictModel::Forest(forest)
        }
    };

    Ok(ModelBundle {
        metadata: BundleMetadata {
            layout: LayoutInfo::current(),
            trained_at: Utc::now(),
            sample_count: records.len(),
            n_trees: config.n_trees,
            seed: config.seed,
        },
        content_type_encoder,
        sender_reputation_encoder,
        verdict_labels,
        score_model,
        verdict_model,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::ContentItem;
    use crate::logic::fixtures::sample_records;
    use crate::logic::model::load_bundle;

    fn small_config() -> TrainingConfig {
        TrainingConfig { n_trees: 10, seed: 7 }
    }

    #[test]
    fn test_default_config() {
        let config = TrainingConfig::default();
        assert_eq!(config.n_trees, 100);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_encoders_cover_dataset_and_fallbacks() {
        let bundle = train(&sample_records(), &small_config()).unwrap();

        assert_eq!(bundle.content_type_encoder.classes(), &["email", "sms", "website"]);
        assert!(bundle.sender_reputation_encoder.encode("blacklisted").is_some());
        assert!(bundle.sender_reputation_encoder.encode("unknown").is_some());
        assert_eq!(bundle.verdict_labels.classes(), &["dangerous", "safe", "suspicious"]);
    }

    #[test]
    fn test_metadata() {
        let records = sample_records();
        let bundle = train(&records, &small_config()).unwrap();

        assert_eq!(bundle.metadata.sample_count, records.len());
        assert_eq!(bundle.metadata.n_trees, 10);
        assert_eq!(bundle.metadata.seed, 7);
        assert_eq!(bundle.metadata.layout, LayoutInfo::current());
        assert!(bundle.validate().is_ok());
    }

    #[test]
    fn test_empty_records_rejected() {
        assert!(matches!(
            train(&[], &small_config()),
            Err(RiskError::Training(_))
        ));
    }

    #[test]
    fn test_single_verdict_dataset_trains() {
        let records: Vec<TrainingRecord> = sample_records()
            .into_iter()
            .map(|r| TrainingRecord {
                verdict: "safe".to_string(),
                ..r
            })
            .collect();

        let bundle = train(&records, &small_config()).unwrap();
        assert_eq!(bundle.verdict_labels.classes(), &["safe"]);
        assert!(matches!(bundle.verdict_model, VerdictModel::Constant(_)));

        let features = FeatureVector::new(0, 5.0, 0, 2, 1);
        let prediction = bundle.predict(&features).unwrap();
        assert_eq!(prediction.verdict, "safe");
        assert!(prediction.risk_score >= 0);
    }

    #[test]
    fn test_run_writes_loadable_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = dir.path().join("dataset.csv");
        let output = dir.path().join("models").join("model_data.json");

        let mut writer = csv::Writer::from_path(&dataset).unwrap();
        for record in sample_records() {
            writer.serialize(record).unwrap();
        }
        writer.flush().unwrap();

        let trained = run(&dataset, &output, &small_config()).unwrap();
        let loaded = load_bundle(&output).unwrap();
        assert_eq!(loaded.metadata.sample_count, sample_records().len());

        let item = ContentItem::from_value(serde_json::json!({
            "content_type": "sms",
            "sender_reputation": "low",
            "domain_age_estimate_days": 12,
            "social_engineering_indicators": ["prize"]
        }))
        .unwrap();
        assert_eq!(
            loaded.predict_item(&item).unwrap(),
            trained.predict_item(&item).unwrap()
        );
    }

    #[test]
    fn test_missing_dataset_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("model_data.json");

        let result = run(&dir.path().join("dataset.csv"), &output, &small_config());

        assert!(matches!(result, Err(RiskError::DatasetMissing(_))));
        assert!(!output.exists());
    }
}

//! Bundle persistence and inference tests

#[cfg(test)]
mod integration_tests {
    use std::fs;

    use serde_json::json;
    use tempfile::tempdir;

    use crate::error::RiskError;
    use crate::logic::features::{layout, ContentItem};
    use crate::logic::fixtures::sample_records;
    use crate::logic::model::{load_bundle, save_bundle, ModelBundle};
    use crate::logic::trainer::{train, TrainingConfig};

    fn trained() -> ModelBundle {
        train(&sample_records(), &TrainingConfig { n_trees: 15, seed: 42 }).unwrap()
    }

    fn item(value: serde_json::Value) -> ContentItem {
        ContentItem::from_value(value).unwrap()
    }

    #[test]
    fn test_end_to_end_prediction() {
        let bundle = trained();
        let prediction = bundle
            .predict_item(&item(json!({
                "content_type": "email",
                "sender_reputation": "blacklisted",
                "domain_age_estimate_days": 5,
                "social_engineering_indicators": ["urgency"],
                "technical_indicators": []
            })))
            .unwrap();

        assert!(prediction.risk_score >= 0);
        assert!(bundle
            .verdict_labels
            .classes()
            .iter()
            .any(|c| *c == prediction.verdict));
    }

    #[test]
    fn test_fallback_items_predict_like_defaults() {
        let bundle = trained();
        let unseen = bundle
            .predict_item(&item(json!({
                "content_type": "unknown_type_xyz",
                "sender_reputation": "stellar"
            })))
            .unwrap();
        let defaults = bundle
            .predict_item(&item(json!({
                "content_type": "website",
                "sender_reputation": "unknown"
            })))
            .unwrap();

        assert_eq!(unseen, defaults);
    }

    #[test]
    fn test_save_load_preserves_predictions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("models").join("model_data.json");
        let bundle = trained();

        save_bundle(&bundle, &path).unwrap();
        let restored = load_bundle(&path).unwrap();

        assert_eq!(restored.metadata.sample_count, bundle.metadata.sample_count);
        assert_eq!(restored.content_type_encoder, bundle.content_type_encoder);
        assert_eq!(restored.sender_reputation_encoder, bundle.sender_reputation_encoder);
        for body in [
            json!({ "content_type": "sms", "sender_reputation": "low", "domain_age_estimate_days": 3 }),
            json!({ "content_type": "website", "sender_reputation": "high", "domain_age_estimate_days": 3000 }),
            json!({ "social_engineering_indicators": ["a", "b", "c"], "technical_indicators": ["x"] }),
        ] {
            let item = item(body);
            assert_eq!(
                restored.predict_item(&item).unwrap(),
                bundle.predict_item(&item).unwrap()
            );
        }
    }

    #[test]
    fn test_save_overwrites_previous_bundle() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model_data.json");
        fs::write(&path, b"stale").unwrap();

        save_bundle(&trained(), &path).unwrap();

        assert!(load_bundle(&path).is_ok());
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_load_missing_bundle() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            load_bundle(&dir.path().join("model_data.json")),
            Err(RiskError::BundleMissing(_))
        ));
    }

    #[test]
    fn test_load_corrupt_bundle() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model_data.json");
        fs::write(&path, b"{\"metadata\": 1}").unwrap();
        assert!(matches!(load_bundle(&path), Err(RiskError::Serialization(_))));
    }

    #[test]
    fn test_load_rejects_layout_mismatch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model_data.json");
        let mut bundle = trained();
        bundle.metadata.layout.hash = layout::layout_hash().wrapping_add(1);

        save_bundle(&bundle, &path).unwrap();

        assert!(matches!(
            load_bundle(&path),
            Err(RiskError::LayoutMismatch { .. })
        ));
    }
}

//! Feature Vector - Core data structure for model input
//!
//! Values are always stored in `FEATURE_LAYOUT` order, so the same
//! vector can be fed to both forests without any reordering.

use serde::{Deserialize, Serialize};

use super::layout::{
    feature_index, FEATURE_COUNT, FEATURE_LAYOUT, IDX_CONTENT_TYPE, IDX_DOMAIN_AGE,
    IDX_SENDER_REPUTATION, IDX_SOCIAL_ENG, IDX_TECH,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Build a vector from the five engineered fields
    pub fn new(
        content_type_encoded: u32,
        domain_age_days: f64,
        sender_reputation_encoded: u32,
        num_social_eng_indicators: usize,
        num_tech_indicators: usize,
    ) -> Self {
        let mut values = [0.0; FEATURE_COUNT];
        values[IDX_CONTENT_TYPE] = content_type_encoded as f64;
        values[IDX_DOMAIN_AGE] = domain_age_days;
        values[IDX_SENDER_REPUTATION] = sender_reputation_encoded as f64;
        values[IDX_SOCIAL_ENG] = num_social_eng_indicators as f64;
        values[IDX_TECH] = num_tech_indicators as f64;
        Self { values }
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.values.to_vec()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        feature_index(name).and_then(|i| self.get(i))
    }

    pub fn content_type_encoded(&self) -> f64 {
        self.values[IDX_CONTENT_TYPE]
    }

    pub fn domain_age_days(&self) -> f64 {
        self.values[IDX_DOMAIN_AGE]
    }

    pub fn sender_reputation_encoded(&self) -> f64 {
        self.values[IDX_SENDER_REPUTATION]
    }

    pub fn num_social_eng_indicators(&self) -> f64 {
        self.values[IDX_SOCIAL_ENG]
    }

    pub fn num_tech_indicators(&self) -> f64 {
        self.values[IDX_TECH]
    }

    /// Named values, for debug logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        let named: serde_json::Map<String, serde_json::Value> = FEATURE_LAYOUT
            .iter()
            .zip(self.values.iter())
            .map(|(name, value)| (name.to_string(), serde_json::json!(value)))
            .collect();
        serde_json::Value::Object(named)
    }
}

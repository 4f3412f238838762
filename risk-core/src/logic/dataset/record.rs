use serde::{Deserialize, Serialize};

/// One labeled row. Extra CSV columns are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrainingRecord {
    // Raw inputs
    pub content_type: String,
    pub sender_reputation: String,
    pub domain_age_days: f64,
    pub num_social_eng_indicators: u32,
    pub num_tech_indicators: u32,

    // Labels
    pub risk_score: f64,
    pub verdict: String,
}

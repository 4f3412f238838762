//! Deterministic training data for tests

use crate::logic::dataset::TrainingRecord;

const CONTENT_TYPES: &[&str] = &["email", "website", "sms"];
const REPUTATIONS: &[(&str, f64)] = &[
    ("high", 0.0),
    ("medium", 15.0),
    ("low", 30.0),
    ("unknown", 20.0),
    ("blacklisted", 45.0),
];
const AGES: &[f64] = &[2.0, 5.0, 40.0, 365.0, 3000.0];

pub(crate) fn verdict_for(score: f64) -> &'static str {
    if score < 30.0 {
        "safe"
    } else if score < 65.0 {
        "suspicious"
    } else {
        "dangerous"
    }
}

/// Every content type × reputation × age, with indicator counts cycling 0..=3
pub(crate) fn sample_records() -> Vec<TrainingRecord> {
    let mut records = Vec::new();
    let mut i = 0u32;

    for content_type in CONTENT_TYPES {
        for (reputation, reputation_risk) in REPUTATIONS {
            for age in AGES {
                let social = i % 4;
                let tech = (i / 2) % 3;
                let age_risk = if *age < 30.0 { 20.0 } else { 0.0 };
                let score = (reputation_risk + age_risk + 8.0 * social as f64 + 5.0 * tech as f64)
                    .min(100.0);

                records.push(TrainingRecord {
                    content_type: content_type.to_string(),
                    sender_reputation: reputation.to_string(),
                    domain_age_days: *age,
                    num_social_eng_indicators: social,
                    num_tech_indicators: tech,
                    risk_score: score,
                    verdict: verdict_for(score).to_string(),
                });
                i += 1;
            }
        }
    }

    records
}

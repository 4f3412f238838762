//! Feature Extraction - request item → feature vector
//!
//! Input anomalies are normalized rather than rejected:
//! - unseen categories encode as the encoder's fallback
//! - unparseable or missing ages become 0
//! - missing indicator lists count as 0
//!
//! Only structurally wrong input (not an object, wrong field types) is an error.

use serde::Deserialize;
use serde_json::Value;

use crate::constants::{FALLBACK_CONTENT_TYPE, FALLBACK_SENDER_REPUTATION};
use crate::error::{RiskError, RiskResult};
use crate::logic::encoder::CategoryEncoder;
use super::vector::FeatureVector;

/// One content item as submitted for scoring. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentItem {
    pub content_type: Option<String>,
    pub sender_reputation: Option<String>,
    pub domain_age_estimate_days: Option<Value>,
    pub social_engineering_indicators: Option<Vec<Value>>,
    pub technical_indicators: Option<Vec<Value>>,
}

impl ContentItem {
    /// Parse a request body; the top-level value must be a JSON object
    pub fn from_slice(body: &[u8]) -> RiskResult<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| RiskError::InvalidItem(format!("malformed JSON: {}", e)))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> RiskResult<Self> {
        if !value.is_object() {
            return Err(RiskError::InvalidItem(
                "request body must be a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| RiskError::InvalidItem(e.to_string()))
    }

    pub fn content_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or(FALLBACK_CONTENT_TYPE)
    }

    pub fn sender_reputation(&self) -> &str {
        self.sender_reputation
            .as_deref()
            .unwrap_or(FALLBACK_SENDER_REPUTATION)
    }

    pub fn domain_age_days(&self) -> i64 {
        coerce_age(self.domain_age_estimate_days.as_ref())
    }

    pub fn num_social_eng_indicators(&self) -> usize {
        self.social_engineering_indicators.as_ref().map_or(0, Vec::len)
    }

    pub fn num_tech_indicators(&self) -> usize {
        self.technical_indicators.as_ref().map_or(0, Vec::len)
    }
}

/// Coerce a loosely typed age to whole days.
///
/// Integers pass through, floats truncate, numeric strings are trimmed and
/// parsed, booleans count as 1/0. Everything else, including `"null"`, is 0.
/// Negative ages clamp to 0.
pub fn coerce_age(value: Option<&Value>) -> i64 {
    let age = match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(b)) => i64::from(*b),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or_else(|_| {
            log::debug!("Unparseable domain age {:?}, using 0", s);
            0
        }),
        Some(_) => 0,
    };

    age.max(0)
}

/// Encodes items against the vocabularies of a trained bundle
pub struct FeatureExtractor<'a> {
    content_type: &'a CategoryEncoder,
    sender_reputation: &'a CategoryEncoder,
}

impl<'a> FeatureExtractor<'a> {
    pub fn new(content_type: &'a CategoryEncoder, sender_reputation: &'a CategoryEncoder) -> Self {
        Self {
            content_type,
            sender_reputation,
        }
    }

    pub fn extract(&self, item: &ContentItem) -> FeatureVector {
        FeatureVector::new(
            self.content_type.encode_or_fallback(item.content_type()),
            item.domain_age_days() as f64,
            self.sender_reputation
                .encode_or_fallback(item.sender_reputation()),
            item.num_social_eng_indicators(),
            item.num_tech_indicators(),
        )
    }
}

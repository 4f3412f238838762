//! Categorical Encoders
//!
//! `LabelEncoder` maps a frozen, sorted vocabulary to integer codes.
//! `CategoryEncoder` adds a fallback category that is always part of the
//! vocabulary, so encoding an unseen value can never fail.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ============================================================================
// LABEL ENCODER
// ============================================================================

/// Vocabulary frozen at fit time. Codes follow sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn fit<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let distinct: BTreeSet<String> = values
            .into_iter()
            .map(|v| v.as_ref().to_string())
            .collect();

        Self {
            classes: distinct.into_iter().collect(),
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn encode(&self, value: &str) -> Option<u32> {
        self.classes
            .binary_search_by(|class| class.as_str().cmp(value))
            .ok()
            .map(|idx| idx as u32)
    }

    pub fn decode(&self, code: u32) -> Option<&str> {
        self.classes.get(code as usize).map(String::as_str)
    }
}

// ============================================================================
// CATEGORY ENCODER (with fallback)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "CategoryEncoderRepr", try_from = "CategoryEncoderRepr")]
pub struct CategoryEncoder {
    labels: LabelEncoder,
    fallback: String,
    fallback_code: u32,
}

impl CategoryEncoder {
    /// Fit on the observed values; `fallback` joins the vocabulary
    pub fn fit_with_fallback<I, S>(values: I, fallback: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values: Vec<String> = values
            .into_iter()
            .map(|v| v.as_ref().to_string())
            .chain(std::iter::once(fallback.to_string()))
            .collect();
        let labels = LabelEncoder::fit(&values);
        let fallback_code = labels.encode(fallback).unwrap_or_default();

        Self {
            labels,
            fallback: fallback.to_string(),
            fallback_code,
        }
    }

    pub fn classes(&self) -> &[String] {
        self.labels.classes()
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn encode(&self, value: &str) -> Option<u32> {
        self.labels.encode(value)
    }

    /// Code for `value`, or the fallback's code when `value` is out of vocabulary
    pub fn encode_or_fallback(&self, value: &str) -> u32 {
        match self.labels.encode(value) {
            Some(code) => code,
            None => {
                log::debug!(
                    "Unseen category {:?}, encoding as {:?}",
                    value,
                    self.fallback
                );
                self.fallback_code
            }
        }
    }
}

#[derive(Serialize, Deserialize)]
struct CategoryEncoderRepr {
    classes: Vec<String>,
    fallback: String,
}

impl From<CategoryEncoder> for CategoryEncoderRepr {
    fn from(encoder: CategoryEncoder) -> Self {
        Self {
            classes: encoder.labels.classes,
            fallback: encoder.fallback,
        }
    }
}

impl TryFrom<CategoryEncoderRepr> for CategoryEncoder {
    type Error = String;

    fn try_from(repr: CategoryEncoderRepr) -> Result<Self, Self::Error> {
        let sorted = repr.classes.windows(2).all(|w| w[0] < w[1]);
        if !sorted {
            return Err("encoder classes must be sorted and unique".to_string());
        }

        let labels = LabelEncoder {
            classes: repr.classes,
        };
        let fallback_code = labels
            .encode(&repr.fallback)
            .ok_or_else(|| format!("fallback {:?} missing from encoder classes", repr.fallback))?;

        Ok(Self {
            labels,
            fallback: repr.fallback,
            fallback_code,
        })
    }
}

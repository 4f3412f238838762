//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the feature schema shared by training and serving.**
//!
//! ## Rules:
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION
//!
//! A bundle trained against a different layout is refused at load time.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

use crate::error::RiskError;

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT
// ============================================================================

/// Feature names in exact order they appear in the vector
pub const FEATURE_LAYOUT: &[&str] = &[
    "content_type_encoded",      // 0: content type code (encoder vocabulary)
    "domain_age_days",           // 1: domain age, days
    "sender_reputation_encoded", // 2: sender reputation code (encoder vocabulary)
    "num_social_eng_indicators", // 3: social-engineering indicator count
    "num_tech_indicators",       // 4: technical indicator count
];

/// Total number of features
pub const FEATURE_COUNT: usize = 5;

pub const IDX_CONTENT_TYPE: usize = 0;
pub const IDX_DOMAIN_AGE: usize = 1;
pub const IDX_SENDER_REPUTATION: usize = 2;
pub const IDX_SOCIAL_ENG: usize = 3;
pub const IDX_TECH: usize = 4;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 over the version byte and every feature name in order
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]);
    }

    hasher.finalize()
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self::current()
    }
}

/// Validate that a persisted layout matches the compiled one
pub fn validate_layout(version: u8, hash: u32) -> Result<(), RiskError> {
    let current_hash = layout_hash();

    if version != FEATURE_VERSION || hash != current_hash {
        return Err(RiskError::LayoutMismatch {
            expected_version: FEATURE_VERSION,
            expected_hash: current_hash,
            actual_version: version,
            actual_hash: hash,
        });
    }

    Ok(())
}

/// Get feature index by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_index_constants_match_layout() {
        assert_eq!(feature_index("content_type_encoded"), Some(IDX_CONTENT_TYPE));
        assert_eq!(feature_index("domain_age_days"), Some(IDX_DOMAIN_AGE));
        assert_eq!(feature_index("sender_reputation_encoded"), Some(IDX_SENDER_REPUTATION));
        assert_eq!(feature_index("num_social_eng_indicators"), Some(IDX_SOCIAL_ENG));
        assert_eq!(feature_index("num_tech_indicators"), Some(IDX_TECH));
        assert_eq!(feature_index("nonexistent"), None);
    }

    #[test]
    fn test_layout_hash_stable() {
        assert_eq!(layout_hash(), layout_hash());
        assert_ne!(layout_hash(), 0);
    }

    #[test]
    fn test_validate_layout() {
        assert!(validate_layout(FEATURE_VERSION, layout_hash()).is_ok());
        assert!(validate_layout(FEATURE_VERSION + 1, layout_hash()).is_err());
        assert!(matches!(
            validate_layout(FEATURE_VERSION, layout_hash().wrapping_add(1)),
            Err(RiskError::LayoutMismatch { .. })
        ));
    }

    #[test]
    fn test_layout_info() {
        let info = LayoutInfo::current();
        assert_eq!(info.version, FEATURE_VERSION);
        assert_eq!(info.feature_names.len(), FEATURE_COUNT);
        assert_eq!(info.feature_names[0], "content_type_encoded");
    }
}

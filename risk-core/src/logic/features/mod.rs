//! Features Module - Feature Extraction Engine
//!
//! Turns a submitted content item into the fixed five-value vector
//! shared by the score regressor and the verdict classifier.

pub mod layout;
pub mod vector;
pub mod extract;


// Re-export common types
pub use layout::{LayoutInfo, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};
pub use vector::FeatureVector;
pub use extract::{coerce_age, ContentItem, FeatureExtractor};

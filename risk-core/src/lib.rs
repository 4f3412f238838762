//! Content Risk Scoring - Core
//!
//! Feature encoding, training and inference for the risk scorer.
//!
//! ```text
//!  dataset.csv ──▶ trainer ──▶ model_data.json ──▶ risk-server
//!                   │                 ▲
//!                   └─ encoders ──────┘
//! ```
//!
//! The bundle carries the encoders alongside both forests, so serving
//! always encodes with the vocabulary used in training.

pub mod constants;
pub mod error;
pub mod logic;

pub use error::{RiskError, RiskResult};
pub use logic::features::{ContentItem, FeatureVector};
pub use logic::model::{load_bundle, save_bundle, ModelBundle, Prediction};
pub use logic::trainer::{train, TrainingConfig};

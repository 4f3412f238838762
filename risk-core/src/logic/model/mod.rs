//! Model Module - fitted forests and their encoders
//!
//! The bundle is the only artifact shared between trainer and server.

pub mod bundle;
pub mod inference;
pub mod storage;

// Re-export common types
pub use bundle::{BundleMetadata, ModelBundle, ScoreModel, VerdictForest, VerdictModel};
pub use inference::{round_score, Prediction};
pub use storage::{load_bundle, save_bundle};

#[cfg(test)]
mod tests;

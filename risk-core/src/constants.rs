//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! Every value can be overridden from the environment.

/// Default training dataset location
pub const DEFAULT_DATASET_PATH: &str = "dataset.csv";

/// Default model bundle location
pub const DEFAULT_MODEL_PATH: &str = "model_data.json";

/// Default number of trees per forest
pub const DEFAULT_N_TREES: u16 = 100;

/// Default RNG seed for both forests
pub const DEFAULT_SEED: u64 = 42;

/// Category used when a content type is absent or was never seen in training
pub const FALLBACK_CONTENT_TYPE: &str = "website";

/// Category used when a sender reputation is absent or was never seen in training
pub const FALLBACK_SENDER_REPUTATION: &str = "unknown";

/// Verdict reported alongside an error response
pub const UNKNOWN_VERDICT: &str = "unknown";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get dataset path from environment or use default
pub fn get_dataset_path() -> String {
    std::env::var("DATASET_PATH")
        .unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string())
}

/// Get model bundle path from environment or use default
pub fn get_model_path() -> String {
    std::env::var("MODEL_PATH")
        .unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}

/// Get forest size from environment or use default
pub fn get_n_trees() -> u16 {
    std::env::var("TRAIN_N_TREES")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_N_TREES)
}

/// Get training seed from environment or use default
pub fn get_seed() -> u64 {
    std::env::var("TRAIN_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED)
}

//! Trainer entry point
//!
//! Reads `DATASET_PATH`, fits both forests and writes `MODEL_PATH`.

use std::path::PathBuf;
use std::process::ExitCode;

use risk_core::constants;
use risk_core::logic::trainer::{self, TrainingConfig};
use risk_core::RiskError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Risk trainer v{}", constants::APP_VERSION);

    let dataset = PathBuf::from(constants::get_dataset_path());
    let output = PathBuf::from(constants::get_model_path());
    let config = TrainingConfig::from_env();

    match trainer::run(&dataset, &output, &config) {
        Ok(bundle) => {
            log::info!(
                "Models and encoders saved to {} ({} samples)",
                output.display(),
                bundle.metadata.sample_count
            );
            ExitCode::SUCCESS
        }
        Err(RiskError::DatasetMissing(path)) => {
            log::error!(
                "{} not found. Generate the training dataset first.",
                path.display()
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("Training failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{RiskError, RiskResult};
use super::record::TrainingRecord;

/// Load every row of the dataset at `path`.
///
/// Fails with `DatasetMissing` when the file does not exist and with
/// `EmptyDataset` when it has no data rows.
pub fn load_dataset(path: &Path) -> RiskResult<Vec<TrainingRecord>> {
    if !path.exists() {
        return Err(RiskError::DatasetMissing(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let records = read_records(file)?;

    if records.is_empty() {
        return Err(RiskError::EmptyDataset(path.to_path_buf()));
    }

    log::info!("Loaded {} training records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse CSV rows (with header) from any reader
pub fn read_records<R: Read>(reader: R) -> RiskResult<Vec<TrainingRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let record: TrainingRecord = row?;
        records.push(record);
    }

    Ok(records)
}

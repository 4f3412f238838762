use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{RiskError, RiskResult};
use super::bundle::ModelBundle;

/// Save bundle to disk.
///
/// Written to a temp file next to `path`, then renamed over it, so a reader
/// sees either the previous artifact or the complete new one.
pub fn save_bundle(bundle: &ModelBundle, path: &Path) -> RiskResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;

    let mut tmp = NamedTempFile::new_in(&dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        serde_json::to_writer(&mut writer, bundle)?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| RiskError::Io(e.error))?;

    log::info!("Model bundle saved to {}", path.display());
    Ok(())
}

/// Load bundle from disk with layout validation
pub fn load_bundle(path: &Path) -> RiskResult<ModelBundle> {
    if !path.exists() {
        return Err(RiskError::BundleMissing(path.to_path_buf()));
    }

    let reader = BufReader::new(File::open(path)?);
    let bundle: ModelBundle = serde_json::from_reader(reader)?;

    bundle.validate()?;

    log::info!(
        "Model bundle loaded from {} (trained {}, {} samples)",
        path.display(),
        bundle.metadata.trained_at,
        bundle.metadata.sample_count
    );
    Ok(bundle)
}

//! Dataset Module - labeled training data
//!
//! Reads the CSV the trainer consumes. Rows carry the raw categorical
//! values; encoding happens in the trainer.

pub mod record;
pub mod reader;

pub use record::TrainingRecord;
pub use reader::{load_dataset, read_records};

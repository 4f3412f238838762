pub mod dataset;
pub mod encoder;
pub mod features;
pub mod model;
pub mod trainer;

#[cfg(test)]
pub(crate) mod fixtures;

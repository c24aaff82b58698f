//! Job configuration
//!
//! A crop run can be described in a TOML job file; command-line flags
//! override whatever the file sets.

mod crop_job;
#[cfg(test)]
mod tests;

pub use crop_job::CropJob;

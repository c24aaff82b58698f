//! Label-aware region extraction
//!
//! This module turns a metadata center/radius pair into pixel bounds and
//! cuts the matching sub-image out of a decoded mammogram. All three labels
//! share one extraction routine; what differs between them lives in a
//! per-label [`LabelPolicy`].

mod region;
mod label;
mod region_extractor;
#[cfg(test)]
mod tests;

// Public exports
pub use region::{CropBounds, Region};
pub use label::{Activation, CenterSource, HalfExtentSource, Label, LabelPolicy};
pub use region_extractor::{extract_region, CropRequest, CroppedRegion, DatasetGeometry, RegionExtractor};

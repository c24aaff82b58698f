//! Batch cropping over a sorted image folder
//!
//! This module wires the sorter, the metadata rows and the region extractor
//! together and routes every crop to its label's output folders.

mod cropper;
mod report;
mod targets;

pub use cropper::{pair_records, BatchCropper, CropSettings, PairedRecord};
pub use report::{BatchReport, RowFailure};
pub use targets::OutputTargets;

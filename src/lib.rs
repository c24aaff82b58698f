pub mod errors;
pub mod utils;
pub mod sorter;
pub mod extractor;
pub mod metadata;
pub mod batch;
pub mod converter;
pub mod config;
pub mod commands;
pub mod api;

pub use crate::api::MiasKit;

pub use errors::{MiasError, MiasResult};
pub use sorter::{ImageSorter, SortedImages};
pub use extractor::{CropBounds, DatasetGeometry, Label, Region, RegionExtractor};
pub use metadata::{read_metadata, MetadataRow};
pub use batch::{BatchCropper, BatchReport, CropSettings, OutputTargets};
pub use converter::FormatConverter;
pub use config::CropJob;

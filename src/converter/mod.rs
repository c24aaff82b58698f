//! Folder-wide image format conversion
//!
//! Re-encodes every entry of a folder, in sorted order, into one target
//! encoding. Files that fail to decode or write are reported and skipped.


use std::fs;
use std::path::{Path, PathBuf};
use log::{error, info};

use crate::errors::{MiasError, MiasResult};
use crate::sorter::ImageSorter;
use crate::utils::image_utils::{self, is_supported_format, SUPPORTED_FORMATS};
use crate::utils::path_utils::split_extension;
use crate::utils::progress::ProgressTracker;

/// Outcome of a conversion run
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub total: usize,
    pub converted: usize,
    pub failures: Vec<(String, MiasError)>,
}

/// Converts a folder of images to another encoding
pub struct FormatConverter {
    folder: PathBuf,
    new_folder: PathBuf,
    new_format: String,
    show_progress: bool,
}

impl FormatConverter {
    /// Create a converter
    ///
    /// # Arguments
    /// * `folder` - Folder with the source images
    /// * `new_folder` - Destination folder; `None` writes next to the sources
    /// * `new_format` - Target extension with the leading dot, e.g. ".png"
    pub fn new<P: AsRef<Path>>(folder: P, new_folder: Option<P>, new_format: &str) -> MiasResult<Self> {
        if !is_supported_format(new_format) {
            return Err(MiasError::InvalidInput(format!(
                "Format incompatible {}, it must be one of: {}", new_format, SUPPORTED_FORMATS.join(", "))));
        }

        let folder = folder.as_ref().to_path_buf();
        let new_folder = new_folder.map(|p| p.as_ref().to_path_buf()).unwrap_or_else(|| folder.clone());

        Ok(FormatConverter {
            folder,
            new_folder,
            new_format: new_format.to_lowercase(),
            show_progress: true,
        })
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Convert every entry of the folder
    pub fn convert(&self) -> MiasResult<ConversionReport> {
        let sorted = ImageSorter::new(&self.folder)
            .with_progress(self.show_progress)
            .sort_images()?;

        let mut report = ConversionReport {
            total: sorted.count,
            ..Default::default()
        };
        let progress = ProgressTracker::maybe(self.show_progress, sorted.count as u64, "Converting");

        for file in &sorted.files {
            match self.convert_one(file) {
                Ok(output) => {
                    report.converted += 1;
                    info!("Working with {} of {} images, {} ------- {}",
                          report.converted, report.total, file, output.display());
                }
                Err(e) => {
                    error!("Cannot convert {}: {}", file, e);
                    report.failures.push((file.clone(), e));
                }
            }
            progress.increment(1);
        }
        progress.finish();

        info!("{} of {} transformed to {}", report.converted, report.total, self.new_format);
        Ok(report)
    }

    fn convert_one(&self, file: &str) -> MiasResult<PathBuf> {
        let image = image_utils::decode(&self.folder.join(file))?;

        let (stem, _) = split_extension(file);
        let output_name = format!("{}{}", stem, self.new_format);
        let bytes = image_utils::encode(&image, &output_name)?;

        let output = self.new_folder.join(&output_name);
        fs::write(&output, bytes).map_err(|e| MiasError::WriteFailed {
            path: output.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(output)
    }
}

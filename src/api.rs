use std::path::Path;
use log::info;

use crate::batch::{BatchCropper, BatchReport, CropSettings, OutputTargets};
use crate::converter::{ConversionReport, FormatConverter};
use crate::errors::MiasResult;
use crate::metadata::read_metadata;
use crate::sorter::{ImageSorter, SortedImages};
use crate::utils::logger::Logger;

/// Main interface to the miaskit library
pub struct MiasKit {
    logger: Logger,
    show_progress: bool,
}

impl MiasKit {
    /// Create a new MiasKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "miaskit.log"
    ///
    /// # Returns
    /// A MiasKit instance or an error if the log file cannot be created
    pub fn new(log_file: Option<&str>) -> MiasResult<Self> {
        let log_path = log_file.unwrap_or("miaskit.log");
        let logger = Logger::new(log_path)?;
        Ok(MiasKit { logger, show_progress: true })
    }

    /// Enable or disable progress bars for every operation
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// List a folder in the canonical order used to pair files with metadata
    pub fn sort<P: AsRef<Path>>(&self, folder: P) -> MiasResult<SortedImages> {
        let sorted = ImageSorter::new(folder).with_progress(self.show_progress).sort_images()?;
        self.logger.log(&format!("Sorted {} entries", sorted.count))?;
        Ok(sorted)
    }

    /// Crop every image of `folder` using the metadata CSV at `metadata_path`
    ///
    /// # Arguments
    /// * `folder` - Folder with the source images
    /// * `metadata_path` - CSV with one row per image, in sorted file order
    /// * `has_header` - Whether the CSV starts with a header line
    /// * `targets` - Output folders per label
    /// * `settings` - Dataset geometry and run options
    ///
    /// # Returns
    /// The run report; per-row failures are inside it, not an `Err`
    pub fn crop<P: AsRef<Path>, Q: AsRef<Path>>(&self,
                                                 folder: P,
                                                 metadata_path: Q,
                                                 has_header: bool,
                                                 targets: OutputTargets,
                                                 settings: CropSettings) -> MiasResult<BatchReport> {
        let rows = read_metadata(metadata_path, has_header)?;
        let settings = CropSettings { show_progress: self.show_progress && settings.show_progress, ..settings };

        let cropper = BatchCropper::new(targets, settings, &self.logger);
        let report = cropper.run(folder, &rows)?;

        self.logger.log_block("Crop summary", &report.summary_lines())?;
        Ok(report)
    }

    /// Re-encode every image of `folder` into `new_format`
    ///
    /// # Arguments
    /// * `folder` - Folder with the source images
    /// * `new_folder` - Destination folder; `None` writes next to the sources
    /// * `new_format` - Target extension with the leading dot, e.g. ".png"
    pub fn convert<P: AsRef<Path>>(&self, folder: P, new_folder: Option<P>, new_format: &str) -> MiasResult<ConversionReport> {
        let converter = FormatConverter::new(folder, new_folder, new_format)?
            .with_progress(self.show_progress);
        let report = converter.convert()?;

        info!("Converted {} of {} files", report.converted, report.total);
        self.logger.log(&format!("Converted {} of {} files to {}", report.converted, report.total, new_format))?;
        Ok(report)
    }
}

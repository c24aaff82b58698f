//! Batch crop orchestration
//!
//! Pairs the sorted folder listing with metadata rows, crops each active
//! row through the region extractor and writes the result to every folder
//! of its label. Row-level failures are recorded and the run moves on;
//! only configuration problems abort it.

use std::fs;
use std::path::Path;
use std::time::Instant;
use log::{debug, error, info, warn};

use crate::errors::{MiasError, MiasResult};
use crate::extractor::{DatasetGeometry, RegionExtractor};
use crate::metadata::MetadataRow;
use crate::sorter::ImageSorter;
use crate::utils::image_utils;
use crate::utils::logger::Logger;
use crate::utils::path_utils::{derived_name, split_extension};
use crate::utils::progress::ProgressTracker;

use super::report::{BatchReport, RowFailure};
use super::targets::OutputTargets;

/// Tunables of a crop run
#[derive(Debug, Clone, Copy)]
pub struct CropSettings {
    pub geometry: DatasetGeometry,
    /// Create missing output folders instead of failing every write
    pub create_dirs: bool,
    pub show_progress: bool,
}

impl Default for CropSettings {
    fn default() -> Self {
        CropSettings {
            geometry: DatasetGeometry::default(),
            create_dirs: false,
            show_progress: true,
        }
    }
}

/// A sorted file name and the metadata row at the same position
#[derive(Debug, Clone, Copy)]
pub struct PairedRecord<'r> {
    /// 0-based position in both sequences
    pub index: usize,
    pub file: &'r str,
    pub row: &'r MetadataRow,
}

/// Pair files with rows by position
///
/// # Returns
/// The paired sequence, or `InvalidInput` when the lengths differ
pub fn pair_records<'r>(files: &'r [String], rows: &'r [MetadataRow]) -> MiasResult<Vec<PairedRecord<'r>>> {
    if files.len() != rows.len() {
        return Err(MiasError::InvalidInput(format!(
            "Folder has {} entries but metadata has {} rows; files and rows are matched by position",
            files.len(), rows.len()
        )));
    }

    Ok(files.iter()
        .zip(rows.iter())
        .enumerate()
        .map(|(index, (file, row))| PairedRecord { index, file: file.as_str(), row })
        .collect())
}

/// Runs label-aware cropping over a whole folder
pub struct BatchCropper<'a> {
    targets: OutputTargets,
    settings: CropSettings,
    extractor: RegionExtractor,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> BatchCropper<'a> {
    /// Create a new cropper
    ///
    /// # Arguments
    /// * `targets` - Output folders per label
    /// * `settings` - Dataset geometry and run options
    /// * `logger` - Logger for recording operations
    pub fn new(targets: OutputTargets, settings: CropSettings, logger: &'a Logger) -> Self {
        BatchCropper {
            targets,
            settings,
            extractor: RegionExtractor::new(settings.geometry),
            logger,
        }
    }

    /// Crop every image of `folder` according to `rows`
    ///
    /// # Arguments
    /// * `folder` - Folder holding the source images
    /// * `rows` - Metadata rows in file order
    ///
    /// # Returns
    /// A report of the run, or an error if the run could not start
    pub fn run<P: AsRef<Path>>(&self, folder: P, rows: &[MetadataRow]) -> MiasResult<BatchReport> {
        let started = Instant::now();
        let folder = folder.as_ref();

        self.targets.validate()?;
        let sorted = ImageSorter::new(folder)
            .with_progress(self.settings.show_progress)
            .sort_images()?;
        let records = pair_records(&sorted.files, rows)?;

        // Folders are only created once the run is known to be consistent
        if self.settings.create_dirs {
            self.targets.create_all()?;
        }

        info!("Cropping {} images from {}", records.len(), folder.display());
        self.logger.log(&format!("Cropping {} images from {}", records.len(), folder.display()))?;

        let mut report = BatchReport::new(records.len());
        let progress = ProgressTracker::maybe(self.settings.show_progress, records.len() as u64, "Cropping");

        for record in &records {
            progress.set_message(record.file);
            self.process(folder, record, &mut report);
            progress.increment(1);
        }
        progress.finish();

        report.elapsed = started.elapsed();
        info!("{} of {} rows cropped, {} skipped, {} failures",
              report.cropped, report.total_rows, report.skipped, report.failure_count());
        Ok(report)
    }

    fn process(&self, folder: &Path, record: &PairedRecord<'_>, report: &mut BatchReport) {
        let row = record.row;
        let label = row.label;
        let number = record.index + 1;

        if !self.extractor.is_active(label, row.x(), row.y()) {
            info!("Skipping {} of {} ({}, {}): X {} Y {} do not match the {} guard",
                  number, report.total_rows, record.file, label, row.x(), row.y(), label);
            report.skipped += 1;
            return;
        }

        let (stem, _) = split_extension(record.file);
        if !row.name.is_empty() && row.name != stem {
            warn!("Row {} refers to {} but is paired with {}", number, row.name, record.file);
        }

        info!("Working with {} of {} {} images, {} X: {} Y: {}",
              number, report.total_rows, label, record.file, row.x(), row.y());

        let image = match image_utils::decode(&folder.join(record.file)) {
            Ok(image) => image,
            Err(e) => return record_failure(report, record, e),
        };

        let cropped = match self.extractor.extract(&image, record.file, label, row.x(), row.y(), row.r()) {
            Ok(cropped) => cropped,
            Err(e) => return record_failure(report, record, e),
        };
        debug!("{}x{} -> {}x{}", image.width(), image.height(), cropped.image.width(), cropped.image.height());
        drop(image);

        let output_name = derived_name(record.file, label.policy().suffix);
        let bytes = match image_utils::encode(&cropped.image, &output_name) {
            Ok(bytes) => bytes,
            Err(e) => return record_failure(report, record, e),
        };

        let mut all_written = true;
        for target in self.targets.folders_for(label) {
            let path = target.join(&output_name);
            match fs::write(&path, &bytes) {
                Ok(()) => {
                    debug!("Wrote {}", path.display());
                    report.files_written += 1;
                }
                Err(e) => {
                    all_written = false;
                    record_failure(report, record, MiasError::WriteFailed {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        if all_written {
            info!("{} ------ {} OK", row.name, record.file);
            report.cropped += 1;
        }
    }
}

fn record_failure(report: &mut BatchReport, record: &PairedRecord<'_>, error: MiasError) {
    let number = record.index + 1;
    error!("Cannot crop {} (row {}, {}): {}", record.file, number, record.row.label, error);
    report.failures.push(RowFailure {
        row: number,
        file: record.file.to_string(),
        label: record.row.label,
        error,
    });
}

//! Label-aware crop command
//!
//! Builds a crop job from an optional TOML file plus command-line
//! overrides, then runs the batch cropper over the input folder.

use std::path::PathBuf;
use clap::ArgMatches;
use log::{info, warn};

use crate::batch::{BatchCropper, CropSettings, OutputTargets};
use crate::commands::command_traits::Command;
use crate::config::CropJob;
use crate::errors::{MiasError, MiasResult};
use crate::metadata::read_metadata;
use crate::utils::logger::Logger;

/// Command for cropping a folder of mammograms
pub struct CropCommand<'a> {
    /// Folder with the source images
    folder: PathBuf,
    /// Metadata CSV, one row per image
    metadata: PathBuf,
    has_header: bool,
    targets: OutputTargets,
    settings: CropSettings,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> CropCommand<'a> {
    /// Create a new crop command
    ///
    /// All configuration is validated here so that a bad setup fails
    /// before any file is read.
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> MiasResult<Self> {
        let job = Self::job_from_args(args)?;

        let folder = job.folder.clone()
            .ok_or_else(|| MiasError::InvalidInput("Missing input folder".to_string()))?;
        let metadata = job.metadata.clone()
            .ok_or_else(|| MiasError::InvalidInput("Missing metadata file (--metadata)".to_string()))?;
        let targets = job.targets()?;
        let settings = job.settings(!args.get_flag("no-progress"))?;

        info!("Input folder: {}", folder.display());
        info!("Metadata: {} (header: {})", metadata.display(), job.has_header);
        info!("Output folders: {:?}", targets);
        info!("Default size: {}, Normal center: {:?}",
              settings.geometry.default_size, settings.geometry.normal_center);

        Ok(CropCommand {
            folder,
            metadata,
            has_header: job.has_header,
            targets,
            settings,
            logger,
        })
    }

    /// Merge the optional job file with command-line overrides
    pub fn job_from_args(args: &ArgMatches) -> MiasResult<CropJob> {
        let mut job = match args.get_one::<String>("config") {
            Some(path) => {
                info!("Loading crop job from {}", path);
                CropJob::from_file(path)?
            }
            None => CropJob::default(),
        };

        let path_arg = |name: &str| args.get_one::<String>(name).map(PathBuf::from);

        if let Some(folder) = path_arg("input") {
            job.folder = Some(folder);
        }
        if let Some(metadata) = path_arg("metadata") {
            job.metadata = Some(metadata);
        }
        if let Some(dir) = path_arg("normal-dir") {
            job.normal = Some(dir);
        }
        if let Some(dir) = path_arg("benign-dir") {
            job.benign = Some(dir);
        }
        if let Some(dir) = path_arg("malignant-dir") {
            job.malignant = Some(dir);
        }
        if let Some(dir) = path_arg("tumor-dir") {
            job.tumor = Some(dir);
        }
        if args.get_flag("no-header") {
            job.has_header = false;
        }
        if args.get_flag("create-dirs") {
            job.create_dirs = true;
        }
        if let Some(size) = parse_number(args, "size")? {
            job.default_size = Some(size);
        }
        if let Some(x) = parse_number(args, "x-mean")? {
            job.x_mean = Some(x);
        }
        if let Some(y) = parse_number(args, "y-mean")? {
            job.y_mean = Some(y);
        }

        Ok(job)
    }
}

fn parse_number(args: &ArgMatches, name: &str) -> MiasResult<Option<f64>> {
    match args.get_one::<String>(name) {
        None => Ok(None),
        Some(value) => value.parse::<f64>()
            .map(Some)
            .map_err(|_| MiasError::InvalidInput(format!("Invalid --{} value: {}", name, value))),
    }
}

impl<'a> Command for CropCommand<'a> {
    fn execute(&self) -> MiasResult<()> {
        let rows = read_metadata(&self.metadata, self.has_header)?;

        let cropper = BatchCropper::new(self.targets.clone(), self.settings, self.logger);
        let report = cropper.run(&self.folder, &rows)?;

        for failure in &report.failures {
            warn!("FAILED {}", failure);
        }
        info!("{} of {} rows cropped ({} skipped, {} failed, {} files written)",
              report.cropped, report.total_rows, report.skipped, report.failed_rows(), report.files_written);

        self.logger.log_block("Crop summary", &report.summary_lines())?;
        Ok(())
    }
}

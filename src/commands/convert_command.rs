//! Format conversion command
//!
//! This module implements the command for re-encoding every image of
//! a folder into another format.

use std::path::PathBuf;
use clap::ArgMatches;
use log::{info, warn};

use crate::commands::command_traits::Command;
use crate::converter::FormatConverter;
use crate::errors::{MiasError, MiasResult};
use crate::utils::logger::Logger;

/// Command for converting a folder of images
pub struct ConvertCommand<'a> {
    /// Folder with the source images
    folder: PathBuf,
    /// Destination folder (None = same as source)
    output_folder: Option<PathBuf>,
    /// Target extension with the leading dot
    new_format: String,
    show_progress: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> MiasResult<Self> {
        let folder = args.get_one::<String>("input")
            .ok_or_else(|| MiasError::InvalidInput("Missing input folder".to_string()))?;

        let new_format = args.get_one::<String>("format")
            .cloned()
            .ok_or_else(|| MiasError::InvalidInput("Missing target format".to_string()))?;

        Ok(ConvertCommand {
            folder: PathBuf::from(folder),
            output_folder: args.get_one::<String>("output").map(PathBuf::from),
            new_format,
            show_progress: !args.get_flag("no-progress"),
            logger,
        })
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> MiasResult<()> {
        info!("Converting {} to {}", self.folder.display(), self.new_format);

        let converter = FormatConverter::new(&self.folder, self.output_folder.as_ref(), &self.new_format)?
            .with_progress(self.show_progress);
        let report = converter.convert()?;

        for (file, error) in &report.failures {
            warn!("Not converted: {} ({})", file, error);
        }

        let summary = format!("{} of {} transformed to {}", report.converted, report.total, self.new_format);
        info!("{}", summary);
        self.logger.log(&summary)?;

        Ok(())
    }
}

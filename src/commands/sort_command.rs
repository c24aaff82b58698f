//! Folder sorting command
//!
//! Prints the canonical ordering that crop runs pair with metadata rows.

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::errors::{MiasError, MiasResult};
use crate::sorter::ImageSorter;
use crate::utils::logger::Logger;

/// Command for listing a folder in sorted order
pub struct SortCommand<'a> {
    /// Folder to list
    folder: PathBuf,
    show_progress: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> SortCommand<'a> {
    /// Create a new sort command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> MiasResult<Self> {
        let folder = args.get_one::<String>("input")
            .ok_or_else(|| MiasError::InvalidInput("Missing input folder".to_string()))?;

        Ok(SortCommand {
            folder: PathBuf::from(folder),
            show_progress: !args.get_flag("no-progress"),
            logger,
        })
    }
}

impl<'a> Command for SortCommand<'a> {
    fn execute(&self) -> MiasResult<()> {
        let sorted = ImageSorter::new(&self.folder)
            .with_progress(self.show_progress)
            .sort_images()?;

        let lines: Vec<String> = sorted.files.iter()
            .enumerate()
            .map(|(index, name)| format!("Index: {} ----- {}", index, name))
            .collect();
        for line in &lines {
            info!("{}", line);
        }
        info!("Images: {}", sorted.count);

        self.logger.log_block(&format!("Images: {}", sorted.count), &lines)?;
        Ok(())
    }
}

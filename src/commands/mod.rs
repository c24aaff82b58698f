//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod sort_command;
pub mod crop_command;
pub mod convert_command;
#[cfg(test)]
mod tests;

pub use cli::{build_cli, log_dir};
pub use command_traits::{Command, CommandFactory};
pub use sort_command::SortCommand;
pub use crop_command::CropCommand;
pub use convert_command::ConvertCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::errors::MiasResult;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct MiasCommandFactory;

impl MiasCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        MiasCommandFactory
    }
}

impl Default for MiasCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for MiasCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> MiasResult<Box<dyn Command + 'a>> {
        if args.get_flag("crop") {
            Ok(Box::new(CropCommand::new(args, logger)?))
        } else if args.get_flag("convert") {
            Ok(Box::new(ConvertCommand::new(args, logger)?))
        } else {
            // Default to sort command
            Ok(Box::new(SortCommand::new(args, logger)?))
        }
    }
}

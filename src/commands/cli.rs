//! Command-line definition

use std::fs;
use std::path::{Path, PathBuf};
use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};

use crate::errors::{MiasError, MiasResult};

/// Build the argument parser for the `miaskit` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("miaskit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sort, crop and convert Mini-MIAS mammography images")
        .arg(
            Arg::new("input")
                .help("Folder with the source images")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("crop")
                .long("crop")
                .help("Crop images using the metadata coordinates")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("convert")
                .short('c')
                .long("convert")
                .help("Convert every image to another format")
                .action(ArgAction::SetTrue)
                .conflicts_with("crop"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML job file for cropping")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("metadata")
                .short('m')
                .long("metadata")
                .help("CSV with one row per image in sorted file order")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("no-header")
                .long("no-header")
                .help("The metadata CSV has no header line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("normal-dir")
                .long("normal-dir")
                .help("Output folder for Normal crops")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("benign-dir")
                .long("benign-dir")
                .help("Output folder for Benign crops")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("malignant-dir")
                .long("malignant-dir")
                .help("Output folder for Malignant crops")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("tumor-dir")
                .long("tumor-dir")
                .help("Output folder receiving both Benign and Malignant crops")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("create-dirs")
                .long("create-dirs")
                .help("Create missing output folders")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("size")
                .long("size")
                .help("Side length in pixels of Normal crops")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("x-mean")
                .long("x-mean")
                .help("Center x of Normal crops (defaults to the image center)")
                .value_name("PIXELS")
                .requires("y-mean")
                .required(false),
        )
        .arg(
            Arg::new("y-mean")
                .long("y-mean")
                .help("Center y of Normal crops, measured from the bottom")
                .value_name("PIXELS")
                .requires("x-mean")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output folder for converted images (defaults to the input folder)")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Target format for conversion, e.g. .png")
                .value_name("EXT")
                .default_value(".png")
                .required(false),
        )
        .arg(
            Arg::new("log-dir")
                .long("log-dir")
                .help("Folder for miaskit.log and miaskit-global.log (must not be the input folder)")
                .value_name("DIR")
                .default_value(".")
                .required(false),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .help("Hide progress bars")
                .action(ArgAction::SetTrue),
        )
}

/// Folder receiving the run logs
///
/// The input folder is refused: a log file there would be one more entry in
/// the sorted listing and shift every metadata row by one.
pub fn log_dir(args: &ArgMatches) -> MiasResult<PathBuf> {
    let dir = args.get_one::<String>("log-dir")
        .map(PathBuf::from)
        .ok_or_else(|| MiasError::InvalidInput("Missing log folder".to_string()))?;

    if let Some(input) = args.get_one::<String>("input") {
        if same_folder(&dir, Path::new(input)) {
            return Err(MiasError::InvalidInput(format!(
                "Log files would be written into the input folder {}; pass --log-dir", input)));
        }
    }
    Ok(dir)
}

fn same_folder(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

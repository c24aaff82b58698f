//! Tests for the convert command

extern crate std;

use std::fs;

use image::{GrayImage, Luma};
use tempfile::TempDir;

use crate::commands::{build_cli, Command, ConvertCommand};
use crate::errors::MiasError;
use crate::utils::logger::Logger;

#[test]
fn test_format_flag_defaults_to_png() {
    let dir = TempDir::new().unwrap();
    let images = dir.path().join("images");
    let converted = dir.path().join("converted");
    fs::create_dir(&images).unwrap();
    fs::create_dir(&converted).unwrap();
    GrayImage::from_fn(6, 4, |x, y| Luma([(x * 20 + y) as u8])).save(images.join("mdb001.tif")).unwrap();

    let logger = Logger::new(dir.path().join("convert.log")).unwrap();
    let args = build_cli().try_get_matches_from([
        "miaskit", images.to_str().unwrap(), "--convert", "-o", converted.to_str().unwrap(), "--no-progress",
    ]).unwrap();

    ConvertCommand::new(&args, &logger).unwrap().execute().unwrap();

    std::assert!(converted.join("mdb001.png").is_file());
    let log = fs::read_to_string(dir.path().join("convert.log")).unwrap();
    std::assert!(log.contains("1 of 1 transformed to .png"));
}

#[test]
fn test_unsupported_format_fails_the_command() {
    let dir = TempDir::new().unwrap();
    let logger = Logger::new(dir.path().join("convert.log")).unwrap();
    let args = build_cli().try_get_matches_from([
        "miaskit", dir.path().to_str().unwrap(), "--convert", "--format", ".webp", "--no-progress",
    ]).unwrap();

    let result = ConvertCommand::new(&args, &logger).unwrap().execute();
    std::assert!(matches!(result, Err(MiasError::InvalidInput(_))));
}

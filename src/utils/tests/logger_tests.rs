//! Tests for the file logger

extern crate std;

use std::fs;

use log::{LevelFilter, Log, Metadata};
use tempfile::TempDir;

use crate::utils::logger::Logger;

#[test]
fn test_log_block_writes_framed_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("run.log");
    let logger = Logger::new(path.to_str().unwrap()).unwrap();

    logger.log_block("Summary", &["3 of 4 cropped".to_string()]).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    std::assert_eq!(lines.len(), 4);
    std::assert_eq!(lines[1], "Summary");
    std::assert_eq!(lines[2], "  3 of 4 cropped");
    std::assert_eq!(lines[0], lines[3]);
}

#[test]
fn test_enabled_respects_level() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("level.log");
    let logger = Logger::with_level(path.to_str().unwrap(), LevelFilter::Warn).unwrap();

    let warn = Metadata::builder().level(log::Level::Warn).build();
    let info = Metadata::builder().level(log::Level::Info).build();
    std::assert!(Log::enabled(&logger, &warn));
    std::assert!(!Log::enabled(&logger, &info));
}

#[test]
fn test_global_logger_installs_once() {
    let dir = TempDir::new().unwrap();
    Logger::init_global_logger(dir.path().join("global.log"), LevelFilter::Info).unwrap();
    // a second install only warns
    Logger::init_global_logger(dir.path().join("again.log"), LevelFilter::Info).unwrap();

    std::assert!(dir.path().join("global.log").is_file());
    std::assert_eq!(log::max_level(), LevelFilter::Info);
}

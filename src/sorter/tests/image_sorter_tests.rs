//! Tests for the sorted folder listing

extern crate std;

use std::fs::{self, File};
use std::path::Path;

use tempfile::TempDir;

use crate::errors::MiasError;
use crate::sorter::ImageSorter;

fn touch(dir: &Path, name: &str) {
    File::create(dir.join(name)).unwrap();
}

#[test]
fn test_sort_is_independent_of_creation_order() {
    let first = TempDir::new().unwrap();
    for name in ["mdb010.pgm", "mdb002.pgm", "mdb001.pgm", "Zeta.png"] {
        touch(first.path(), name);
    }
    let second = TempDir::new().unwrap();
    for name in ["Zeta.png", "mdb001.pgm", "mdb010.pgm", "mdb002.pgm"] {
        touch(second.path(), name);
    }

    let a = ImageSorter::new(first.path()).with_progress(false).sort_images().unwrap();
    let b = ImageSorter::new(second.path()).with_progress(false).sort_images().unwrap();

    std::assert_eq!(a, b);
    std::assert_eq!(a.files, vec!["Zeta.png", "mdb001.pgm", "mdb002.pgm", "mdb010.pgm"]);
}

#[test]
fn test_repeated_calls_are_identical() {
    let dir = TempDir::new().unwrap();
    for name in ["c.png", "a.png", "b.png"] {
        touch(dir.path(), name);
    }
    let sorter = ImageSorter::new(dir.path()).with_progress(false);
    std::assert_eq!(sorter.sort_images().unwrap(), sorter.sort_images().unwrap());
}

#[test]
fn test_count_matches_entries_including_directories() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "a.png");
    touch(dir.path(), "notes.txt");
    fs::create_dir(dir.path().join("nested")).unwrap();

    let sorted = ImageSorter::new(dir.path()).with_progress(false).sort_images().unwrap();
    std::assert_eq!(sorted.count, 3);
    std::assert_eq!(sorted.count, sorted.files.len());
}

#[test]
fn test_empty_folder_reference_is_invalid_input() {
    let result = ImageSorter::new("").with_progress(false).sort_images();
    std::assert!(matches!(result, Err(MiasError::InvalidInput(_))));
}

#[test]
fn test_missing_folder_is_enumeration_failure() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");
    let result = ImageSorter::new(&missing).with_progress(false).sort_images();
    std::assert!(matches!(result, Err(MiasError::EnumerationFailed { .. })));
}

#[test]
fn test_empty_folder_sorts_to_nothing() {
    let dir = TempDir::new().unwrap();
    let sorted = ImageSorter::new(dir.path()).with_progress(false).sort_images().unwrap();
    std::assert!(sorted.is_empty());
}

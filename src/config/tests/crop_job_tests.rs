//! Tests for TOML crop jobs

extern crate std;

use std::path::PathBuf;

use crate::config::CropJob;
use crate::errors::MiasError;
use crate::extractor::DatasetGeometry;

const FULL: &str = r#"
[input]
folder = "images"
metadata = "mias.csv"
has_header = false

[output]
normal = "out/normal"
benign = "out/benign"
malignant = "out/malignant"
tumor = "out/tumor"
create_dirs = true

[crop]
default_size = 224
x_mean = 512.5
y_mean = 400
"#;

#[test]
fn test_full_job() {
    let job = CropJob::from_str(FULL).unwrap();
    std::assert_eq!(job.folder, Some(PathBuf::from("images")));
    std::assert_eq!(job.metadata, Some(PathBuf::from("mias.csv")));
    std::assert!(!job.has_header);
    std::assert!(job.create_dirs);

    let targets = job.targets().unwrap();
    std::assert_eq!(targets.tumor, PathBuf::from("out/tumor"));

    let geometry = job.geometry().unwrap();
    std::assert_eq!(geometry.default_size, 224.0);
    std::assert_eq!(geometry.normal_center, Some((512.5, 400.0)));
}

#[test]
fn test_empty_job_uses_defaults() {
    let job = CropJob::from_str("").unwrap();
    std::assert_eq!(job, CropJob::default());
    std::assert!(job.has_header);
    std::assert_eq!(job.geometry().unwrap(), DatasetGeometry::default());
}

#[test]
fn test_missing_output_folder_is_invalid_input() {
    let job = CropJob::from_str("[output]\nnormal = \"n\"\nbenign = \"b\"\nmalignant = \"m\"\n").unwrap();
    let err = job.targets().unwrap_err();
    std::assert!(matches!(err, MiasError::InvalidInput(_)));
    std::assert!(err.to_string().contains("tumor"));
}

#[test]
fn test_half_center_is_rejected() {
    let job = CropJob::from_str("[crop]\nx_mean = 10\n").unwrap();
    std::assert!(matches!(job.geometry(), Err(MiasError::InvalidInput(_))));
}

#[test]
fn test_non_positive_size_is_rejected() {
    let job = CropJob::from_str("[crop]\ndefault_size = 0\n").unwrap();
    std::assert!(job.geometry().is_err());
}

#[test]
fn test_wrong_types_are_config_errors() {
    std::assert!(matches!(CropJob::from_str("[input]\nfolder = 3\n"), Err(MiasError::ConfigError(_))));
    std::assert!(matches!(CropJob::from_str("[crop]\ndefault_size = \"big\"\n"), Err(MiasError::ConfigError(_))));
    std::assert!(matches!(CropJob::from_str("[output]\ncreate_dirs = \"yes\"\n"), Err(MiasError::ConfigError(_))));
    std::assert!(matches!(CropJob::from_str("not = [valid"), Err(MiasError::ConfigError(_))));
}

#[test]
fn test_missing_file_is_config_error() {
    std::assert!(matches!(CropJob::from_file("/no/such/job.toml"), Err(MiasError::ConfigError(_))));
}

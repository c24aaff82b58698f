//! Destination folders per label

use std::fs;
use std::path::{Path, PathBuf};
use log::info;

use crate::errors::{MiasError, MiasResult};
use crate::extractor::Label;

/// Output folders for every label
///
/// Benign and Malignant crops are also written to the merged tumor folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTargets {
    pub normal: PathBuf,
    pub benign: PathBuf,
    pub malignant: PathBuf,
    pub tumor: PathBuf,
}

impl OutputTargets {
    pub fn new<P: AsRef<Path>>(normal: P, benign: P, malignant: P, tumor: P) -> Self {
        OutputTargets {
            normal: normal.as_ref().to_path_buf(),
            benign: benign.as_ref().to_path_buf(),
            malignant: malignant.as_ref().to_path_buf(),
            tumor: tumor.as_ref().to_path_buf(),
        }
    }

    /// Every folder a crop of `label` is written to
    pub fn folders_for(&self, label: Label) -> Vec<&Path> {
        let own = match label {
            Label::Benign => self.benign.as_path(),
            Label::Malignant => self.malignant.as_path(),
            Label::Normal => self.normal.as_path(),
        };
        let mut folders = vec![own];
        if label.is_tumor() {
            folders.push(self.tumor.as_path());
        }
        folders
    }

    /// Reject empty folder paths before any I/O happens
    pub fn validate(&self) -> MiasResult<()> {
        for (name, folder) in self.named() {
            if folder.as_os_str().is_empty() {
                return Err(MiasError::InvalidInput(format!("Output folder for {} is not set", name)));
            }
        }
        Ok(())
    }

    /// Create every folder that does not exist yet
    pub fn create_all(&self) -> MiasResult<()> {
        for (name, folder) in self.named() {
            if !folder.is_dir() {
                info!("Creating {} output folder {}", name, folder.display());
                fs::create_dir_all(folder)?;
            }
        }
        Ok(())
    }

    fn named(&self) -> [(&'static str, &Path); 4] {
        [
            ("normal", self.normal.as_path()),
            ("benign", self.benign.as_path()),
            ("malignant", self.malignant.as_path()),
            ("tumor", self.tumor.as_path()),
        ]
    }
}

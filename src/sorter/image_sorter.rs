//! Sorted listing of an image folder

use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, error, info};

use crate::errors::{MiasError, MiasResult};
use crate::utils::progress::ProgressTracker;

/// Entry names of a folder in canonical order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedImages {
    /// Entry names, sorted
    pub files: Vec<String>,
    /// Number of entries; always `files.len()`
    pub count: usize,
}

impl SortedImages {
    fn new(files: Vec<String>) -> Self {
        let count = files.len();
        SortedImages { files, count }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Lists a folder and sorts its entries by name
///
/// No recursion and no extension filtering happen here: every entry
/// (including sub-directories) takes part in the ordering, exactly as it
/// does in the positional metadata join.
pub struct ImageSorter {
    folder: PathBuf,
    show_progress: bool,
}

impl ImageSorter {
    /// Create a sorter for `folder`
    ///
    /// # Arguments
    /// * `folder` - Folder containing the image files
    pub fn new<P: AsRef<Path>>(folder: P) -> Self {
        ImageSorter {
            folder: folder.as_ref().to_path_buf(),
            show_progress: true,
        }
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Sort the entries of the folder
    ///
    /// # Returns
    /// The sorted entry names and their count, or `InvalidInput` for an empty
    /// folder reference and `EnumerationFailed` when the listing fails
    pub fn sort_images(&self) -> MiasResult<SortedImages> {
        if self.folder.as_os_str().is_empty() {
            return Err(MiasError::InvalidInput("Folder path is empty".to_string()));
        }

        let folder_name = self.folder.display().to_string();
        info!("Sorting image files in folder: {}", folder_name);

        let files = self.list_entries(&folder_name).map_err(|e| {
            error!("Failed to sort images: {}", e);
            e
        })?;
        let sorted = SortedImages::new(sort_names(files));

        info!("Images: {}", sorted.count);
        let progress = ProgressTracker::maybe(self.show_progress, sorted.count as u64, "Sorting");
        for (index, name) in sorted.files.iter().enumerate() {
            debug!("Index: {} ----- {}", index, name);
            progress.increment(1);
        }
        progress.finish();

        info!("Finished sorting images.");
        Ok(sorted)
    }

    fn list_entries(&self, folder_name: &str) -> MiasResult<Vec<String>> {
        let enumeration_failed = |reason: String| MiasError::EnumerationFailed {
            folder: folder_name.to_string(),
            reason,
        };

        let entries = fs::read_dir(&self.folder).map_err(|e| enumeration_failed(e.to_string()))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| enumeration_failed(e.to_string()))?;
            let name = entry.file_name().into_string().map_err(|raw| {
                enumeration_failed(format!("entry name is not valid UTF-8: {:?}", raw))
            })?;
            files.push(name);
        }
        Ok(files)
    }
}

/// Total order used for every listing: byte-wise (code point) comparison
pub fn sort_names(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}

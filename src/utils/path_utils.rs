//! Path utility functions
//!
//! Helpers for splitting file names and building output names.

use std::path::Path;

/// Splits a file name into stem and extension, keeping the leading dot
///
/// `"mdb001.pgm"` becomes `("mdb001", ".pgm")`; a name without an
/// extension yields an empty extension.
pub fn split_extension(file_name: &str) -> (String, String) {
    let path = Path::new(file_name);
    let stem = path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
        .to_string();
    let extension = path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default();
    (stem, extension)
}

/// Builds `<stem><suffix><.ext>` from an original file name
pub fn derived_name(file_name: &str, suffix: &str) -> String {
    let (stem, extension) = split_extension(file_name);
    format!("{}{}{}", stem, suffix, extension)
}

/// Lowercased extension without the dot
pub fn extension_lowercase(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or("")
        .to_lowercase()
}

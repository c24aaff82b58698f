//! Image decode/encode helpers
//!
//! Thin wrappers over the `image` crate that map its errors onto the
//! per-file error variants and resolve output encodings from extensions.

use std::io::Cursor;
use std::path::Path;
use image::{DynamicImage, ImageFormat};

use crate::errors::{MiasError, MiasResult};
use crate::utils::path_utils::extension_lowercase;

/// Extensions (with the leading dot) the tool reads and writes
pub const SUPPORTED_FORMATS: [&str; 10] = [
    ".bmp", ".pbm", ".pgm", ".ppm", ".jpeg", ".jpg", ".jpe", ".tiff", ".tif", ".png",
];

/// Whether `format` (e.g. ".png") is one of [`SUPPORTED_FORMATS`]
pub fn is_supported_format(format: &str) -> bool {
    let lower = format.to_lowercase();
    SUPPORTED_FORMATS.iter().any(|f| *f == lower)
}

/// Maps a file name's extension onto an encoder format
pub fn format_for(file_name: &str) -> Option<ImageFormat> {
    match extension_lowercase(file_name).as_str() {
        "bmp" => Some(ImageFormat::Bmp),
        "pbm" | "pgm" | "ppm" | "pnm" => Some(ImageFormat::Pnm),
        "jpeg" | "jpg" | "jpe" => Some(ImageFormat::Jpeg),
        "tiff" | "tif" => Some(ImageFormat::Tiff),
        "png" => Some(ImageFormat::Png),
        _ => None,
    }
}

/// Decodes the image at `path`
pub fn decode(path: &Path) -> MiasResult<DynamicImage> {
    image::open(path).map_err(|e| MiasError::DecodeFailed {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Encodes `image` into an in-memory buffer in the encoding implied by `file_name`
///
/// Encoding once and writing the same bytes to every destination keeps
/// copies of a crop byte-identical.
pub fn encode(image: &DynamicImage, file_name: &str) -> MiasResult<Vec<u8>> {
    let format = format_for(file_name).ok_or_else(|| MiasError::WriteFailed {
        path: file_name.to_string(),
        reason: "no encoder for this extension".to_string(),
    })?;

    let mut cursor = Cursor::new(Vec::new());
    image.write_to(&mut cursor, format).map_err(|e| MiasError::WriteFailed {
        path: file_name.to_string(),
        reason: e.to_string(),
    })?;
    Ok(cursor.into_inner())
}

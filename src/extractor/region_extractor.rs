//! Crop computation and slicing
//!
//! [`extract_region`] is the label-independent core: center and half-extent
//! in, cropped pixels out. [`RegionExtractor`] resolves those two inputs from
//! a metadata row through the label's policy.

use image::{DynamicImage, GenericImageView};
use log::debug;

use crate::errors::{MiasError, MiasResult};

use super::label::{CenterSource, HalfExtentSource, Label};
use super::region::{CropBounds, Region};

/// Dataset-wide geometry used by labels without per-row coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetGeometry {
    /// Side length of crops taken from Normal images
    pub default_size: f64,
    /// Center `(x_mean, y_mean)` for Normal crops, y measured from the bottom;
    /// `None` means the center of each image
    pub normal_center: Option<(f64, f64)>,
}

impl Default for DatasetGeometry {
    fn default() -> Self {
        DatasetGeometry {
            default_size: 224.0,
            normal_center: None,
        }
    }
}

/// Fully resolved crop parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRequest {
    pub center_x: f64,
    /// Measured from the bottom edge
    pub center_y: f64,
    pub half_extent: f64,
}

/// A successful crop
#[derive(Debug, Clone)]
pub struct CroppedRegion {
    pub image: DynamicImage,
    /// Bounds before clamping, as computed from the metadata
    pub bounds: CropBounds,
    /// Rectangle actually sliced out of the source image
    pub region: Region,
}

/// Crop `image` around `request`
///
/// # Arguments
/// * `image` - Decoded source image
/// * `request` - Center and half-extent
/// * `file` - Source file name, used in error messages
///
/// # Returns
/// The cropped image, or `GeometryError` when the inputs are not finite or
/// the bounds collapse to an empty rectangle after clamping
pub fn extract_region(image: &DynamicImage, request: &CropRequest, file: &str) -> MiasResult<CroppedRegion> {
    let geometry_error = |reason: String| MiasError::GeometryError {
        file: file.to_string(),
        reason,
    };

    if !(request.center_x.is_finite() && request.center_y.is_finite() && request.half_extent.is_finite()) {
        return Err(geometry_error(format!("non-finite crop parameters {:?}", request)));
    }

    let (width, height) = image.dimensions();
    let bounds = CropBounds::from_center(request.center_x, request.center_y, request.half_extent, height);
    let clamped = bounds.clamp(width, height);

    let region = clamped.to_region().ok_or_else(|| geometry_error(format!(
        "bounds x[{}:{}] y[{}:{}] leave no pixels inside a {}x{} image",
        bounds.x_low, bounds.x_high, bounds.y_low, bounds.y_high, width, height
    )))?;

    debug!("Cropping {}: x[{}:{}] y[{}:{}] -> region {}x{} at ({}, {})",
           file, bounds.x_low, bounds.x_high, bounds.y_low, bounds.y_high,
           region.width, region.height, region.x, region.y);

    let cropped = image.crop_imm(region.x, region.y, region.width, region.height);

    Ok(CroppedRegion {
        image: cropped,
        bounds,
        region,
    })
}

/// Applies label policies to metadata coordinates
#[derive(Debug, Clone, Copy)]
pub struct RegionExtractor {
    geometry: DatasetGeometry,
}

impl RegionExtractor {
    pub fn new(geometry: DatasetGeometry) -> Self {
        RegionExtractor { geometry }
    }

    /// Whether a row with this label and these coordinates should be cropped
    pub fn is_active(&self, label: Label, center_x: f64, center_y: f64) -> bool {
        label.policy().activation.is_active(center_x, center_y)
    }

    /// Resolve center and half-extent for a row
    ///
    /// # Arguments
    /// * `label` - Row label
    /// * `center_x`, `center_y` - Row coordinates (0 when absent)
    /// * `radius` - Row radius (0 when absent)
    /// * `width`, `height` - Source image dimensions
    pub fn request_for(&self, label: Label, center_x: f64, center_y: f64, radius: f64,
                       width: u32, height: u32) -> CropRequest {
        let policy = label.policy();

        let half_extent = match policy.half_extent {
            HalfExtentSource::Radius => radius / 2.0,
            HalfExtentSource::DatasetDefault => self.geometry.default_size / 2.0,
        };

        let (center_x, center_y) = match policy.center {
            CenterSource::Row => (center_x, center_y),
            CenterSource::DatasetCenter => self.geometry.normal_center
                .unwrap_or((f64::from(width) / 2.0, f64::from(height) / 2.0)),
        };

        CropRequest { center_x, center_y, half_extent }
    }

    /// Crop `image` for one metadata row
    pub fn extract(&self, image: &DynamicImage, file: &str, label: Label,
                   center_x: f64, center_y: f64, radius: f64) -> MiasResult<CroppedRegion> {
        let request = self.request_for(label, center_x, center_y, radius, image.width(), image.height());
        extract_region(image, &request, file)
    }
}

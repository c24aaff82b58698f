//! Crop bounds and pixel regions
//!
//! `CropBounds` holds the four signed bounds computed from metadata, before
//! and after clamping. `Region` is the validated, non-empty rectangle that
//! is actually sliced out of the image. Coordinates follow the image
//! convention where (0,0) is the top-left corner.

/// Region for image extraction (in pixel coordinates)
///
/// Represents a rectangular area defined by its top-left corner coordinates
/// and dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }
}

/// Four pixel bounds of a crop, `[y_low:y_high, x_low:x_high]`
///
/// Bounds are signed so that a center near an edge can be represented
/// before clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBounds {
    pub x_low: i64,
    pub x_high: i64,
    pub y_low: i64,
    pub y_high: i64,
}

impl CropBounds {
    /// Compute bounds from a center and half-extent
    ///
    /// The metadata y coordinate is measured from the bottom of the image, so
    /// it is flipped against `image_height`. Every bound is truncated toward
    /// zero after the arithmetic is done in `f64`.
    ///
    /// # Arguments
    /// * `center_x` - Center column, from the left edge
    /// * `center_y` - Center row, from the bottom edge
    /// * `half_extent` - Half the side length of the crop
    /// * `image_height` - Height of the source image in pixels
    pub fn from_center(center_x: f64, center_y: f64, half_extent: f64, image_height: u32) -> Self {
        let height = f64::from(image_height);
        CropBounds {
            x_low: truncate(center_x - half_extent),
            x_high: truncate(center_x + half_extent),
            y_low: truncate(height - center_y - half_extent),
            y_high: truncate(height - center_y + half_extent),
        }
    }

    pub fn width(&self) -> i64 {
        self.x_high - self.x_low
    }

    pub fn height(&self) -> i64 {
        self.y_high - self.y_low
    }

    /// Clamp every bound into `[0, width]` / `[0, height]`
    pub fn clamp(&self, width: u32, height: u32) -> CropBounds {
        let (w, h) = (i64::from(width), i64::from(height));
        CropBounds {
            x_low: self.x_low.clamp(0, w),
            x_high: self.x_high.clamp(0, w),
            y_low: self.y_low.clamp(0, h),
            y_high: self.y_high.clamp(0, h),
        }
    }

    /// Convert to a pixel region, or `None` if either extent is not positive
    ///
    /// Only meaningful on clamped bounds.
    pub fn to_region(&self) -> Option<Region> {
        if self.width() <= 0 || self.height() <= 0 || self.x_low < 0 || self.y_low < 0 {
            return None;
        }
        let x = u32::try_from(self.x_low).ok()?;
        let y = u32::try_from(self.y_low).ok()?;
        let width = u32::try_from(self.width()).ok()?;
        let height = u32::try_from(self.height()).ok()?;
        Some(Region::new(x, y, width, height))
    }
}

// `as` saturates on overflow and maps NaN to 0; callers reject non-finite input first.
fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}

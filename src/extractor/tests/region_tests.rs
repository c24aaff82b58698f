//! Tests for crop bounds and regions

extern crate std;

use crate::extractor::{CropBounds, Region};

#[test]
fn test_bounds_flip_y_against_height() {
    // y_low = 400 - 100 - 25, y_high = 400 - 100 + 25
    let bounds = CropBounds::from_center(100.0, 100.0, 25.0, 400);
    std::assert_eq!(bounds, CropBounds { x_low: 75, x_high: 125, y_low: 275, y_high: 325 });

    let higher = CropBounds::from_center(100.0, 150.0, 25.0, 400);
    std::assert_eq!(higher, CropBounds { x_low: 75, x_high: 125, y_low: 225, y_high: 275 });
}

#[test]
fn test_fractional_bounds_truncate_toward_zero() {
    // half extent 10.5: 50 - 10.5 = 39.5 -> 39, 50 + 10.5 = 60.5 -> 60
    let bounds = CropBounds::from_center(50.0, 50.0, 10.5, 100);
    std::assert_eq!((bounds.x_low, bounds.x_high), (39, 60));
    std::assert_eq!((bounds.y_low, bounds.y_high), (39, 60));

    // negative values truncate toward zero too: -2.5 -> -2
    let edge = CropBounds::from_center(3.0, 0.0, 5.5, 10);
    std::assert_eq!(edge.x_low, -2);
}

#[test]
fn test_clamp_keeps_bounds_inside_image() {
    let bounds = CropBounds { x_low: -10, x_high: 30, y_low: 90, y_high: 130 };
    let clamped = bounds.clamp(100, 100);
    std::assert_eq!(clamped, CropBounds { x_low: 0, x_high: 30, y_low: 90, y_high: 100 });
    std::assert_eq!(clamped.to_region(), Some(Region::new(0, 90, 30, 10)));
}

#[test]
fn test_collapsed_bounds_have_no_region() {
    let outside = CropBounds { x_low: 120, x_high: 160, y_low: 10, y_high: 20 }.clamp(100, 100);
    std::assert_eq!(outside.width(), 0);
    std::assert_eq!(outside.to_region(), None);

    let inverted = CropBounds { x_low: 20, x_high: 10, y_low: 0, y_high: 5 };
    std::assert_eq!(inverted.to_region(), None);
}

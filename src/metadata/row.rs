//! One metadata record

use crate::extractor::Label;

/// Fixed column positions of the metadata file
pub mod columns {
    pub const NAME: usize = 0;
    pub const SEVERITY: usize = 3;
    pub const X: usize = 4;
    pub const Y: usize = 5;
    pub const RADIUS: usize = 6;
}

/// One metadata row, paired with the sorted file at the same index
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRow {
    /// Reference id, used for diagnostics only
    pub name: String,
    pub label: Label,
    pub center_x: Option<f64>,
    pub center_y: Option<f64>,
    pub radius: Option<f64>,
}

impl MetadataRow {
    pub fn new(name: &str, label: Label, center_x: Option<f64>, center_y: Option<f64>, radius: Option<f64>) -> Self {
        MetadataRow {
            name: name.to_string(),
            label,
            center_x,
            center_y,
            radius,
        }
    }

    /// Center x, 0 when absent
    pub fn x(&self) -> f64 {
        self.center_x.unwrap_or(0.0)
    }

    /// Center y, 0 when absent
    pub fn y(&self) -> f64 {
        self.center_y.unwrap_or(0.0)
    }

    /// Radius, 0 when absent
    pub fn r(&self) -> f64 {
        self.radius.unwrap_or(0.0)
    }
}

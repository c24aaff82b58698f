//! Diagnosis labels and their extraction policies

use std::fmt;

/// Classification of one mammogram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Benign,
    Malignant,
    Normal,
}

impl Label {
    pub const ALL: [Label; 3] = [Label::Benign, Label::Malignant, Label::Normal];

    /// Parse the severity code from the metadata (`0`, `1`, `2`)
    ///
    /// Integral float spellings such as `"1.0"` are accepted since
    /// spreadsheet exports often write codes that way.
    pub fn from_code(code: &str) -> Option<Label> {
        let value: f64 = code.trim().parse().ok()?;
        if value.fract() != 0.0 {
            return None;
        }
        match value as i64 {
            0 => Some(Label::Benign),
            1 => Some(Label::Malignant),
            2 => Some(Label::Normal),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Label::Benign => 0,
            Label::Malignant => 1,
            Label::Normal => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Label::Benign => "Benign",
            Label::Malignant => "Malignant",
            Label::Normal => "Normal",
        }
    }

    /// Whether crops of this label also go to the merged tumor folder
    pub fn is_tumor(&self) -> bool {
        matches!(self, Label::Benign | Label::Malignant)
    }

    pub fn policy(&self) -> LabelPolicy {
        match self {
            Label::Benign => LabelPolicy {
                half_extent: HalfExtentSource::Radius,
                center: CenterSource::Row,
                activation: Activation::CoordinatesPresent,
                suffix: "_Benign_cropped",
            },
            Label::Malignant => LabelPolicy {
                half_extent: HalfExtentSource::Radius,
                center: CenterSource::Row,
                activation: Activation::CoordinatesPresent,
                suffix: "_Malignant_cropped",
            },
            Label::Normal => LabelPolicy {
                half_extent: HalfExtentSource::DatasetDefault,
                center: CenterSource::DatasetCenter,
                activation: Activation::CoordinatesAbsent,
                suffix: "_Normal_cropped",
            },
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the half side length of a crop comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalfExtentSource {
    /// Half of the row's radius column
    Radius,
    /// Half of the dataset-wide default crop size
    DatasetDefault,
}

/// Where the crop center comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterSource {
    /// The row's own center columns
    Row,
    /// The dataset-wide center (falls back to the image center)
    DatasetCenter,
}

/// When a row of a given label is cropped at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// `center_x > 0 || center_y > 0`
    CoordinatesPresent,
    /// `center_x == 0 || center_y == 0`
    CoordinatesAbsent,
}

impl Activation {
    // Both guards are OR on purpose; a Normal row with one zero coordinate is still cropped.
    pub fn is_active(&self, center_x: f64, center_y: f64) -> bool {
        match self {
            Activation::CoordinatesPresent => center_x > 0.0 || center_y > 0.0,
            Activation::CoordinatesAbsent => center_x == 0.0 || center_y == 0.0,
        }
    }
}

/// Everything that differs between labels during extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelPolicy {
    pub half_extent: HalfExtentSource,
    pub center: CenterSource,
    pub activation: Activation,
    /// Appended to the original file stem when naming outputs
    pub suffix: &'static str,
}

//! TOML description of a crop run

use std::fs;
use std::path::{Path, PathBuf};
use log::debug;

use crate::batch::{CropSettings, OutputTargets};
use crate::errors::{MiasError, MiasResult};
use crate::extractor::DatasetGeometry;

/// Every setting of a crop run; unset values are `None`
#[derive(Debug, Clone, PartialEq)]
pub struct CropJob {
    pub folder: Option<PathBuf>,
    pub metadata: Option<PathBuf>,
    pub has_header: bool,
    pub normal: Option<PathBuf>,
    pub benign: Option<PathBuf>,
    pub malignant: Option<PathBuf>,
    pub tumor: Option<PathBuf>,
    pub create_dirs: bool,
    pub default_size: Option<f64>,
    pub x_mean: Option<f64>,
    pub y_mean: Option<f64>,
}

impl Default for CropJob {
    fn default() -> Self {
        CropJob {
            folder: None,
            metadata: None,
            has_header: true,
            normal: None,
            benign: None,
            malignant: None,
            tumor: None,
            create_dirs: false,
            default_size: None,
            x_mean: None,
            y_mean: None,
        }
    }
}

impl CropJob {
    /// Parse a job from TOML text
    ///
    /// Recognised tables are `[input]`, `[output]` and `[crop]`; unknown keys
    /// are ignored.
    pub fn from_str(content: &str) -> MiasResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(MiasError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut job = CropJob::default();

        if let Some(input) = toml_value.get("input") {
            job.folder = get_path(input, "input", "folder")?;
            job.metadata = get_path(input, "input", "metadata")?;
            if let Some(flag) = get_bool(input, "input", "has_header")? {
                job.has_header = flag;
            }
        }

        if let Some(output) = toml_value.get("output") {
            job.normal = get_path(output, "output", "normal")?;
            job.benign = get_path(output, "output", "benign")?;
            job.malignant = get_path(output, "output", "malignant")?;
            job.tumor = get_path(output, "output", "tumor")?;
            if let Some(flag) = get_bool(output, "output", "create_dirs")? {
                job.create_dirs = flag;
            }
        }

        if let Some(crop) = toml_value.get("crop") {
            job.default_size = get_number(crop, "crop", "default_size")?;
            job.x_mean = get_number(crop, "crop", "x_mean")?;
            job.y_mean = get_number(crop, "crop", "y_mean")?;
        }

        debug!("Parsed crop job: {:?}", job);
        Ok(job)
    }

    /// Load a job from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> MiasResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| MiasError::ConfigError(
            format!("Cannot read {}: {}", path.display(), e)))?;

        Self::from_str(&contents)
    }

    /// Output folders; all four must be set
    pub fn targets(&self) -> MiasResult<OutputTargets> {
        let require = |value: &Option<PathBuf>, name: &str| value.clone().ok_or_else(||
            MiasError::InvalidInput(format!("Output folder for {} is not configured", name)));

        Ok(OutputTargets {
            normal: require(&self.normal, "normal")?,
            benign: require(&self.benign, "benign")?,
            malignant: require(&self.malignant, "malignant")?,
            tumor: require(&self.tumor, "tumor")?,
        })
    }

    /// Dataset geometry; `x_mean` and `y_mean` come as a pair
    pub fn geometry(&self) -> MiasResult<DatasetGeometry> {
        let mut geometry = DatasetGeometry::default();

        if let Some(size) = self.default_size {
            if !(size.is_finite() && size > 0.0) {
                return Err(MiasError::InvalidInput(format!("Default crop size must be positive, got {}", size)));
            }
            geometry.default_size = size;
        }

        geometry.normal_center = match (self.x_mean, self.y_mean) {
            (Some(x), Some(y)) => Some((x, y)),
            (None, None) => None,
            _ => return Err(MiasError::InvalidInput(
                "x_mean and y_mean must be given together".to_string())),
        };

        Ok(geometry)
    }

    pub fn settings(&self, show_progress: bool) -> MiasResult<CropSettings> {
        Ok(CropSettings {
            geometry: self.geometry()?,
            create_dirs: self.create_dirs,
            show_progress,
        })
    }
}

fn type_error(table: &str, key: &str, expected: &str) -> MiasError {
    MiasError::ConfigError(format!("[{}] {} must be {}", table, key, expected))
}

fn get_path(table: &toml::Value, table_name: &str, key: &str) -> MiasResult<Option<PathBuf>> {
    match table.get(key) {
        None => Ok(None),
        Some(v) => v.as_str()
            .map(|s| Some(PathBuf::from(s)))
            .ok_or_else(|| type_error(table_name, key, "a string")),
    }
}

fn get_bool(table: &toml::Value, table_name: &str, key: &str) -> MiasResult<Option<bool>> {
    match table.get(key) {
        None => Ok(None),
        Some(v) => v.as_bool()
            .map(Some)
            .ok_or_else(|| type_error(table_name, key, "a boolean")),
    }
}

fn get_number(table: &toml::Value, table_name: &str, key: &str) -> MiasResult<Option<f64>> {
    match table.get(key) {
        None => Ok(None),
        Some(toml::Value::Integer(i)) => Ok(Some(*i as f64)),
        Some(toml::Value::Float(f)) => Ok(Some(*f)),
        Some(_) => Err(type_error(table_name, key, "a number")),
    }
}

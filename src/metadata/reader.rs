//! CSV parsing for metadata files

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use log::{debug, info};

use crate::errors::{MiasError, MiasResult};
use crate::extractor::Label;

use super::row::{columns, MetadataRow};

/// Read metadata rows from a CSV file
///
/// # Arguments
/// * `file_path` - Path to the CSV file
/// * `has_header` - Whether the first line holds column names
///
/// # Returns
/// Rows in file order, or `InvalidInput` naming the first malformed line
pub fn read_metadata<P: AsRef<Path>>(file_path: P, has_header: bool) -> MiasResult<Vec<MetadataRow>> {
    let path = file_path.as_ref();
    debug!("Reading metadata from CSV file: {:?}", path);

    let file = File::open(path).map_err(|e| MiasError::InvalidInput(
        format!("Cannot open metadata file {}: {}", path.display(), e)))?;
    let rows = parse_metadata(BufReader::new(file), has_header)?;

    info!("Loaded {} metadata rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Parse metadata rows from any reader containing CSV content
pub fn parse_metadata<R: Read>(mut reader: R, has_header: bool) -> MiasResult<Vec<MetadataRow>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)
        .map_err(|e| MiasError::InvalidInput(format!("Cannot read metadata: {}", e)))?;

    let mut rows = Vec::new();
    let mut header_pending = has_header;

    for (line_index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if header_pending {
            header_pending = false;
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(unquote).collect();
        let row = parse_row(&parts).map_err(|reason| MiasError::InvalidInput(
            format!("Metadata line {}: {} ({})", line_index + 1, reason, line)))?;
        rows.push(row);
    }

    Ok(rows)
}

fn parse_row(parts: &[&str]) -> Result<MetadataRow, String> {
    if parts.len() <= columns::SEVERITY {
        return Err(format!("expected at least {} columns, found {}", columns::SEVERITY + 1, parts.len()));
    }

    let label = Label::from_code(parts[columns::SEVERITY])
        .ok_or_else(|| format!("unknown label code '{}'", parts[columns::SEVERITY]))?;

    Ok(MetadataRow {
        name: parts[columns::NAME].to_string(),
        label,
        center_x: parse_optional(parts, columns::X)?,
        center_y: parse_optional(parts, columns::Y)?,
        radius: parse_optional(parts, columns::RADIUS)?,
    })
}

/// Empty, `None` and `NaN` cells as well as missing trailing columns are absent
fn parse_optional(parts: &[&str], column: usize) -> Result<Option<f64>, String> {
    let Some(cell) = parts.get(column) else {
        return Ok(None);
    };
    if cell.is_empty() || cell.eq_ignore_ascii_case("none") || cell.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    cell.parse::<f64>()
        .map(Some)
        .map_err(|_| format!("column {} is not a number: '{}'", column, cell))
}

fn unquote(cell: &str) -> &str {
    let cell = cell.trim();
    cell.strip_prefix('"')
        .and_then(|c| c.strip_suffix('"'))
        .unwrap_or(cell)
        .trim()
}

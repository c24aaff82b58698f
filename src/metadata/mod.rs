//! Positional metadata for the image folder
//!
//! One CSV row per image, aligned with the sorted folder listing by row
//! index alone.

mod row;
mod reader;

pub use row::{MetadataRow, columns};
pub use reader::{parse_metadata, read_metadata};

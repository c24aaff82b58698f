//! Deterministic directory enumeration
//!
//! The sorted order produced here is the only join key between image files
//! and metadata rows, so every other component enumerates through it.

mod image_sorter;
#[cfg(test)]
mod tests;

pub use image_sorter::{ImageSorter, SortedImages};

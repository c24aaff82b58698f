//! Utility modules for common functionality
//!
//! This module provides various utility functions and types used throughout the application.

pub mod logger;
pub mod progress;
pub mod path_utils;
pub mod image_utils;
#[cfg(test)]
mod tests;

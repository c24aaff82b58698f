//! Outcome of a crop run

use std::fmt;
use std::time::Duration;

use crate::errors::MiasError;
use crate::extractor::Label;

/// One per-row or per-destination failure
#[derive(Debug)]
pub struct RowFailure {
    /// 1-based row number
    pub row: usize,
    pub file: String,
    pub label: Label,
    pub error: MiasError,
}

impl fmt::Display for RowFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {} ({}, {}): {}", self.row, self.file, self.label, self.error)
    }
}

/// Counters and failures collected over one run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Rows in the metadata (equal to the number of sorted files)
    pub total_rows: usize,
    /// Rows whose crop was written to every destination
    pub cropped: usize,
    /// Rows left alone by their label's activation guard
    pub skipped: usize,
    /// Output files written, counting each destination
    pub files_written: usize,
    pub failures: Vec<RowFailure>,
    pub elapsed: Duration,
}

impl BatchReport {
    pub fn new(total_rows: usize) -> Self {
        BatchReport {
            total_rows,
            ..Default::default()
        }
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Rows with at least one failure
    pub fn failed_rows(&self) -> usize {
        let mut rows: Vec<usize> = self.failures.iter().map(|f| f.row).collect();
        rows.dedup();
        rows.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Summary lines followed by one line per failure
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("{} of {} rows cropped", self.cropped, self.total_rows),
            format!("{} rows skipped by label guard", self.skipped),
            format!("{} rows failed", self.failed_rows()),
            format!("{} files written", self.files_written),
            format!("Elapsed: {:.2?}", self.elapsed),
        ];
        lines.extend(self.failures.iter().map(|f| format!("FAILED {}", f)));
        lines
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.summary_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

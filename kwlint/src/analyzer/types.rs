//! Result types for an analysis run.

use crate::rules::Finding;
use serde::Serialize;
use std::path::PathBuf;

/// A file that could not be parsed.
///
/// Parse failures are recorded and skipped; they never abort the run.
#[derive(Debug, Clone, Serialize)]
pub struct ParseError {
    /// File that failed to parse.
    pub file: PathBuf,
    /// Parser error message.
    pub error: String,
}

/// Outcome of one analysis run.
#[derive(Debug, Default, Serialize)]
pub struct AnalysisResult {
    /// All findings, sorted by file, line, and column.
    pub findings: Vec<Finding>,
    /// Files that failed to parse.
    pub parse_errors: Vec<ParseError>,
    /// Number of files analyzed.
    pub total_files_analyzed: usize,
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One parsed ANSI/INCITS standard entry.
///
/// All fields are carried as the source text prints them; in particular
/// `publishing_date` keeps the document's own date format. Optional fields
/// (`website`, `publishing_date`) are empty strings when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardRecord {
    pub operating_name: String,
    pub legal_name: String,
    pub website: String,
    /// Standard identifier (e.g. "ANSI/ASSP A10.1"). Never empty for an
    /// emitted record.
    pub document_name: String,
    pub standard_title: String,
    pub publishing_date: String,
    /// True when the entry carries the "American National Standard" marker.
    pub is_american_standard: bool,
}

/// Result of a full extract -> parse -> export run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub records: Vec<StandardRecord>,
    pub output_file: PathBuf,
}

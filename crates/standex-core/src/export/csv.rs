use crate::error::StandexError;
use crate::export::COLUMNS;
use crate::model::StandardRecord;
use std::path::{Path, PathBuf};

/// Write records as a CSV spreadsheet under `output_dir`, returning the
/// written path. The directory is created if it does not exist; an existing
/// file at the destination is overwritten.
pub fn write_spreadsheet(
    records: &[StandardRecord],
    output_dir: &Path,
    filename: &str,
) -> Result<PathBuf, StandexError> {
    std::fs::create_dir_all(output_dir).map_err(|e| StandexError::Export {
        path: output_dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let output_file = output_dir.join(filename);
    let mut writer = csv::Writer::from_path(&output_file).map_err(|e| StandexError::Export {
        path: output_file.clone(),
        reason: e.to_string(),
    })?;

    writer.write_record(COLUMNS)?;
    for record in records {
        writer.write_record([
            record.operating_name.as_str(),
            record.legal_name.as_str(),
            record.website.as_str(),
            record.document_name.as_str(),
            record.standard_title.as_str(),
            record.publishing_date.as_str(),
            if record.is_american_standard { "true" } else { "false" },
        ])?;
    }
    writer.flush()?;

    Ok(output_file)
}

use standex_core::error::StandexError;
use standex_core::extraction::pdf::PdfExtractBackend;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), StandexError> {
    let pdf_bytes = std::fs::read(&pdf_file).map_err(|e| StandexError::FileAccess {
        path: pdf_file.clone(),
        reason: e.to_string(),
    })?;
    let extractor = PdfExtractBackend::new();
    let records = standex_core::extract_standards(&pdf_bytes, &extractor)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&records)?;
            std::fs::write(&path, json)?;
            eprintln!("Parsed {} record(s), written to {}", records.len(), path.display());
        }
        None => match output_format {
            "json" => output::json::print(&records)?,
            _ => output::table::print(&records),
        },
    }

    Ok(())
}

pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod orgs;
pub mod parsing;

use std::path::Path;

use error::StandexError;
use extraction::PdfExtractor;
use model::{PipelineOutput, StandardRecord};

/// Extract and parse standard records from in-memory PDF bytes.
pub fn extract_standards(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<Vec<StandardRecord>, StandexError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let text = extraction::join_pages(&pages);
    parsing::parse_records(&text)
}

/// Main API entry point: run the full extract -> parse -> export pipeline
/// for one PDF file.
///
/// Fails with `FileAccess` before anything is written when the input is
/// missing or unreadable; no partial spreadsheet is produced on extraction
/// or parse failure.
pub fn run_pipeline(
    pdf_path: &Path,
    extractor: &dyn PdfExtractor,
    output_dir: &Path,
    filename: &str,
) -> Result<PipelineOutput, StandexError> {
    let pdf_bytes = std::fs::read(pdf_path).map_err(|e| StandexError::FileAccess {
        path: pdf_path.to_path_buf(),
        reason: e.to_string(),
    })?;

    log::info!(
        "extracting text from {} via {}",
        pdf_path.display(),
        extractor.backend_name()
    );
    let pages = extractor.extract_pages(&pdf_bytes)?;
    let text = extraction::join_pages(&pages);

    log::info!("parsing {} page(s) of text", pages.len());
    let records = parsing::parse_records(&text)?;

    log::info!("exporting {} record(s) to {}", records.len(), output_dir.display());
    let output_file = export::write_spreadsheet(&records, output_dir, filename)?;

    Ok(PipelineOutput {
        records,
        output_file,
    })
}

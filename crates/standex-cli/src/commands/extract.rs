use standex_core::error::StandexError;
use standex_core::extraction::pdf::PdfExtractBackend;
use standex_core::extraction::{self, PdfExtractor};
use std::path::PathBuf;

pub fn run(input_file: PathBuf, out_dir: PathBuf, name: &str) -> Result<(), StandexError> {
    let pdf_bytes = std::fs::read(&input_file).map_err(|e| StandexError::FileAccess {
        path: input_file.clone(),
        reason: e.to_string(),
    })?;

    println!("Extracting text from {}...", input_file.display());
    let extractor = PdfExtractBackend::new();
    let pages = extractor.extract_pages(&pdf_bytes)?;

    println!("Parsing {} page(s) of text...", pages.len());
    let text = extraction::join_pages(&pages);
    let records = standex_core::parsing::parse_records(&text)?;
    println!("Extracted {} record(s)", records.len());

    println!("Saving spreadsheet...");
    let output_file = standex_core::export::write_spreadsheet(&records, &out_dir, name)?;
    println!("Data saved to: {}", output_file.display());

    Ok(())
}

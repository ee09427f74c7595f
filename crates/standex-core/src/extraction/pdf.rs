use crate::error::StandexError;
use crate::extraction::{PageContent, PdfExtractor};

/// PDF extraction backend using the pure-Rust `pdf-extract` crate.
///
/// Reads the whole document from memory; nothing is cached between calls.
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        PdfExtractBackend
    }
}

impl Default for PdfExtractBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdfExtractBackend {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, StandexError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
            .map_err(|e| StandexError::Format(format!("failed to extract text from PDF: {e}")))?;

        log::debug!("extracted {} page(s) of text", pages.len());

        Ok(pages
            .into_iter()
            .enumerate()
            .map(|(i, text)| PageContent {
                page_number: i + 1,
                lines: text.lines().map(|l| l.to_string()).collect(),
            })
            .collect())
    }

    fn backend_name(&self) -> &str {
        "pdf_extract"
    }
}

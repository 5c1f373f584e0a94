use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Cannot read an empty file")]
    Empty,
    #[error("{0}")]
    Parse(String),
}

/// Counts pages in an uploaded document.
pub trait PageCounter: Send + Sync {
    fn count_pages(&self, bytes: &[u8]) -> Result<usize, DocumentError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PdfPageCounter;

impl PageCounter for PdfPageCounter {
    fn count_pages(&self, bytes: &[u8]) -> Result<usize, DocumentError> {
        if bytes.is_empty() {
            return Err(DocumentError::Empty);
        }
        let document =
            lopdf::Document::load_mem(bytes).map_err(|e| DocumentError::Parse(e.to_string()))?;
        Ok(document.get_pages().len())
    }
}

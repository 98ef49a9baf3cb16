//! Turns uploaded bytes into prompt text.
//!
//! Never fails: plain files are decoded as UTF-8 with invalid sequences dropped, and PDFs
//! (recognised by their `%PDF-` header) go through `pdf_extract`, falling back to the same
//! lossy decode when extraction errors or panics.

use bytes::Bytes;
use tracing::warn;

/// One uploaded file part from the multipart body.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub bytes: Bytes,
}

impl UploadedDocument {
    pub fn is_pdf(&self) -> bool {
        self.bytes.starts_with(PDF_MAGIC)
    }
}

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Extracts text from a document. PDF parsing is CPU-bound and runs on the blocking pool.
pub async fn extract_text(document: &UploadedDocument) -> String {
    if !document.is_pdf() {
        return decode_lossy(&document.bytes);
    }

    let bytes = document.bytes.clone();
    let extracted = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| e.to_string())
    })
    .await;

    match extracted {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!(file_name = %document.file_name, "PDF extraction failed, decoding as text: {e}");
            decode_lossy(&document.bytes)
        }
        Err(e) => {
            warn!(file_name = %document.file_name, "PDF extraction task aborted, decoding as text: {e}");
            decode_lossy(&document.bytes)
        }
    }
}

/// UTF-8 decode that skips invalid byte sequences instead of replacing them.
pub fn decode_lossy(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

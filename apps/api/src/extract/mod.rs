//! Resume text extraction — turns an uploaded `.txt`, `.pdf` or `.docx` file into plain text.
//!
//! Dispatch is on the file-name suffix only. No OCR, no encoding detection.

mod docx;
mod pdf;

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type")]
    UnsupportedFileType,

    #[error("PDF could not be read: {0}")]
    Pdf(String),

    #[error("DOCX could not be read: {0}")]
    Docx(String),
}

/// Recognised upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Pdf,
    Docx,
}

impl FileKind {
    pub fn from_file_name(name: &str) -> Result<Self, ExtractError> {
        if name.ends_with(".txt") {
            Ok(FileKind::Text)
        } else if name.ends_with(".pdf") {
            Ok(FileKind::Pdf)
        } else if name.ends_with(".docx") {
            Ok(FileKind::Docx)
        } else {
            Err(ExtractError::UnsupportedFileType)
        }
    }
}

/// An uploaded resume as received from the browser.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Extracts text off the async runtime. PDF parsing is CPU-bound and the
/// parser may panic on malformed input; a panic surfaces as `ExtractError::Pdf`.
pub async fn extract_resume_text(upload: ResumeUpload) -> Result<String, ExtractError> {
    let kind = FileKind::from_file_name(&upload.file_name)?;
    debug!(
        "Extracting {:?} resume '{}' ({} bytes)",
        kind,
        upload.file_name,
        upload.bytes.len()
    );
    tokio::task::spawn_blocking(move || extract_text(kind, &upload.bytes))
        .await
        .map_err(|e| match kind {
            FileKind::Docx => ExtractError::Docx(format!("extraction aborted: {e}")),
            _ => ExtractError::Pdf(format!("extraction aborted: {e}")),
        })?
}

/// Synchronous extraction for an already-classified file.
pub fn extract_text(kind: FileKind, bytes: &[u8]) -> Result<String, ExtractError> {
    match kind {
        FileKind::Text => Ok(decode_lossy(bytes)),
        FileKind::Pdf => pdf::extract(bytes),
        FileKind::Docx => docx::extract(bytes),
    }
}

/// Decodes UTF-8, dropping any byte sequence that is not valid UTF-8.
fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

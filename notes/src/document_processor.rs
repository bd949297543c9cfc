use crate::error::{NotesError, Result};
use crate::models::*;
use pdf_extract::extract_text_from_mem;
use std::path::Path;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const TEXT_MEDIA_TYPE: &str = "text/plain";

const ACCEPTED_EXTENSIONS: [&str; 2] = ["txt", "pdf"];

pub struct DocumentProcessor;

impl DocumentProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Checks the file name against the accepted extensions and settles the media type.
    /// A missing or generic declared type falls back to the one implied by the extension.
    pub fn accept(
        &self,
        filename: &str,
        declared_media_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<Upload> {
        let extension = Path::new(filename)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if !ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
            let shown = if extension.is_empty() {
                filename.to_string()
            } else {
                format!(".{}", extension)
            };
            return Err(NotesError::UnsupportedFormat(shown));
        }

        let media_type = match declared_media_type.map(str::trim) {
            Some(declared) if !declared.is_empty() && declared != "application/octet-stream" => {
                declared.to_string()
            }
            _ if extension == "pdf" => PDF_MEDIA_TYPE.to_string(),
            _ => TEXT_MEDIA_TYPE.to_string(),
        };

        Ok(Upload {
            filename: filename.to_string(),
            media_type,
            bytes,
        })
    }

    pub async fn extract(&self, upload: Upload) -> Result<ExtractedDocument> {
        let Upload {
            filename,
            media_type,
            bytes,
        } = upload;

        let text = if is_pdf(&media_type) {
            log::info!("Processing PDF: {} ({} bytes)", filename, bytes.len());
            self.process_pdf(bytes).await?
        } else {
            log::info!("Processing text file: {} ({} bytes)", filename, bytes.len());
            decode_text(bytes)?
        };

        Ok(ExtractedDocument {
            char_count: text.chars().count(),
            filename,
            media_type,
            text,
        })
    }

    // pdf-extract can panic on malformed input; the blocking task turns that into a JoinError.
    async fn process_pdf(&self, bytes: Vec<u8>) -> Result<String> {
        let extracted = tokio::task::spawn_blocking(move || extract_text_from_mem(&bytes))
            .await
            .map_err(|e| NotesError::Extraction(format!("PDF extraction aborted: {}", e)))?;

        extracted.map_err(|e| NotesError::Extraction(e.to_string()))
    }
}

impl Default for DocumentProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Matches `application/pdf`, ignoring case and any parameters.
pub fn is_pdf(media_type: &str) -> bool {
    media_type
        .split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case(PDF_MEDIA_TYPE))
        .unwrap_or(false)
}

fn decode_text(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|e| NotesError::Extraction(format!("file is not valid UTF-8 text: {}", e)))
}

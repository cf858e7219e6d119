//! Input manager routing payloads to the right extractor

use crate::config::IngestConfig;
use crate::error::{Result, ResumeClassifierError};
use crate::input::file_detector::DocumentFormat;
use crate::input::text_extractor::{PdfExtractor, PlainTextExtractor, TextExtractor, WordExtractor};
use log::info;

/// A raw uploaded document: an opaque payload plus its declared format.
/// Ephemeral, lives only for the duration of one extraction call.
pub struct Document<'a> {
    pub payload: &'a [u8],
    pub format: DocumentFormat,
}

pub struct InputManager {
    max_bytes: usize,
}

impl InputManager {
    pub fn new(config: &IngestConfig) -> Self {
        Self {
            max_bytes: config.max_bytes,
        }
    }

    /// Validates the payload and extracts plain text from it.
    pub fn extract_text(&self, document: &Document<'_>) -> Result<String> {
        if document.payload.len() > self.max_bytes {
            return Err(ResumeClassifierError::PayloadTooLarge {
                size: document.payload.len(),
                max: self.max_bytes,
            });
        }

        match document.format {
            DocumentFormat::Plain => {
                info!("Extracting plain text ({} bytes)", document.payload.len());
                PlainTextExtractor.extract(document.payload)
            }
            DocumentFormat::Pdf => {
                info!("Extracting text from PDF ({} bytes)", document.payload.len());
                PdfExtractor.extract(document.payload)
            }
            DocumentFormat::Word => {
                info!("Extracting text from Word document ({} bytes)", document.payload.len());
                WordExtractor.extract(document.payload)
            }
            DocumentFormat::Unknown => Err(ResumeClassifierError::UnsupportedFormat(
                "expected plain, pdf, or word".to_string(),
            )),
        }
    }
}

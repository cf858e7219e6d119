//! Text extraction from raw document payloads
//!
//! Extraction is pure: each extractor maps a byte payload to plain text
//! without touching the filesystem or any shared state.

use crate::error::{Result, ResumeClassifierError};
use regex::Regex;
use std::io::Read;

pub trait TextExtractor {
    fn extract(&self, payload: &[u8]) -> Result<String>;
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    /// Decodes the payload as UTF-8; invalid byte sequences are replaced
    /// rather than rejected so noisy uploads still extract.
    fn extract(&self, payload: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(payload).trim().to_string())
    }
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    /// Extracts page by page, skipping pages that yield no text (scanned
    /// images). A document where every page comes back empty yields an empty
    /// string, not an error; callers check for emptiness separately.
    fn extract(&self, payload: &[u8]) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(payload).map_err(|e| {
            ResumeClassifierError::CorruptDocument(format!("Failed to extract text from PDF: {}", e))
        })?;

        // pdf-extract separates pages with form feeds
        let pages: Vec<String> = text
            .split('\x0C')
            .map(|page| page.trim().to_string())
            .filter(|page| !page.is_empty())
            .collect();

        Ok(pages.join("\n"))
    }
}

pub struct WordExtractor;

impl TextExtractor for WordExtractor {
    /// Extracts paragraph by paragraph from the document body. Tables,
    /// headers, and footers are not extracted.
    fn extract(&self, payload: &[u8]) -> Result<String> {
        let cursor = std::io::Cursor::new(payload);
        let mut archive = zip::ZipArchive::new(cursor).map_err(|e| {
            ResumeClassifierError::CorruptDocument(format!("Not a Word archive: {}", e))
        })?;

        let document_xml = {
            let mut entry = archive.by_name("word/document.xml").map_err(|e| {
                ResumeClassifierError::CorruptDocument(format!("Missing document body: {}", e))
            })?;
            let mut raw = Vec::new();
            entry.read_to_end(&mut raw).map_err(|e| {
                ResumeClassifierError::CorruptDocument(format!("Unreadable document body: {}", e))
            })?;
            String::from_utf8_lossy(&raw).into_owned()
        };

        Ok(self.xml_to_text(&document_xml))
    }
}

impl WordExtractor {
    fn xml_to_text(&self, xml: &str) -> String {
        let run_re = Regex::new(r"<w:t[^>]*>([^<]*)</w:t>").expect("Invalid run regex");

        let mut paragraphs = Vec::new();
        for paragraph in xml.split("</w:p>") {
            let runs: Vec<&str> = run_re
                .captures_iter(paragraph)
                .filter_map(|cap| cap.get(1))
                .map(|m| m.as_str())
                .collect();

            let line = decode_entities(&runs.concat());
            if !line.trim().is_empty() {
                paragraphs.push(line.trim().to_string());
            }
        }

        paragraphs.join("\n")
    }
}

fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    /// A minimal valid single-page PDF with no content stream, standing in
    /// for a scanned image-only upload
    fn build_textless_pdf() -> Vec<u8> {
        let mut pdf = Vec::new();
        pdf.extend_from_slice(b"%PDF-1.4\n");

        let objects = [
            "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n",
            "2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n",
            "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << >> >>\nendobj\n",
        ];
        let mut offsets = Vec::new();
        for object in objects {
            offsets.push(pdf.len());
            pdf.extend_from_slice(object.as_bytes());
        }

        let xref_start = pdf.len();
        pdf.extend_from_slice(b"xref\n0 4\n0000000000 65535 f \n");
        for offset in &offsets {
            pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        pdf.extend_from_slice(b"trailer\n<< /Size 4 /Root 1 0 R >>\nstartxref\n");
        pdf.extend_from_slice(format!("{}\n", xref_start).as_bytes());
        pdf.extend_from_slice(b"%%EOF\n");
        pdf
    }

    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
            .collect();
        let xml = format!(
            "<?xml version=\"1.0\"?><w:document><w:body>{}</w:body></w:document>",
            body
        );

        let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_plain_text_extraction() {
        let text = PlainTextExtractor.extract(b"  Python and SQL\n").unwrap();
        assert_eq!(text, "Python and SQL");
    }

    #[test]
    fn test_plain_text_tolerates_invalid_utf8() {
        let payload = [b'P', b'y', 0xff, b't', b'h', b'o', b'n'];
        let text = PlainTextExtractor.extract(&payload).unwrap();
        assert!(text.contains("Py"));
        assert!(text.contains("thon"));
    }

    #[test]
    fn test_empty_plain_document_yields_empty_text() {
        let text = PlainTextExtractor.extract(b"").unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_word_extraction_joins_paragraphs() {
        let payload = build_docx(&["Skills: Python, SQL", "Led a small team"]);
        let text = WordExtractor.extract(&payload).unwrap();
        assert_eq!(text, "Skills: Python, SQL\nLed a small team");
    }

    #[test]
    fn test_word_extraction_decodes_entities() {
        let payload = build_docx(&["C&amp;C++ developer"]);
        let text = WordExtractor.extract(&payload).unwrap();
        assert_eq!(text, "C&C++ developer");
    }

    #[test]
    fn test_empty_word_document_yields_empty_text() {
        let payload = build_docx(&[]);
        let text = WordExtractor.extract(&payload).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_word_extraction_rejects_garbage() {
        let result = WordExtractor.extract(b"this is not a zip archive");
        assert!(matches!(
            result,
            Err(crate::error::ResumeClassifierError::CorruptDocument(_))
        ));
    }

    #[test]
    fn test_pdf_with_no_extractable_pages_yields_empty_text() {
        // Every page comes back without text; that is an empty extraction,
        // not a corrupt document
        let payload = build_textless_pdf();
        let text = PdfExtractor.extract(&payload).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_pdf_extraction_rejects_garbage() {
        let result = PdfExtractor.extract(b"this is not a pdf");
        assert!(matches!(
            result,
            Err(crate::error::ResumeClassifierError::CorruptDocument(_))
        ));
    }
}

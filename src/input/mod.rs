//! Document ingestion module
//! Handles format detection, text extraction, and payload validation

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

//! Document format detection

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Plain,
    Pdf,
    Word,
    Unknown,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" | "text" => DocumentFormat::Plain,
            "pdf" => DocumentFormat::Pdf,
            "docx" => DocumentFormat::Word,
            _ => DocumentFormat::Unknown,
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "plain" => DocumentFormat::Plain,
            "pdf" => DocumentFormat::Pdf,
            "word" => DocumentFormat::Word,
            _ => DocumentFormat::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Plain => "plain",
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Word => "word",
            DocumentFormat::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_from_extension() {
        assert_eq!(DocumentFormat::from_extension("txt"), DocumentFormat::Plain);
        assert_eq!(DocumentFormat::from_extension("PDF"), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_extension("docx"), DocumentFormat::Word);
        assert_eq!(DocumentFormat::from_extension("xyz"), DocumentFormat::Unknown);
    }

    #[test]
    fn test_detection_from_tag() {
        assert_eq!(DocumentFormat::from_tag("plain"), DocumentFormat::Plain);
        assert_eq!(DocumentFormat::from_tag("word"), DocumentFormat::Word);
        assert_eq!(DocumentFormat::from_tag("markdown"), DocumentFormat::Unknown);
    }
}

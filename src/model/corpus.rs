//! Labeled training corpus loading

use crate::config::TrainingConfig;
use crate::error::{Result, ResumeClassifierError};
use std::path::Path;

/// A table of (text, label) pairs loaded once at process start.
#[derive(Debug, Clone)]
pub struct TrainingCorpus {
    pub texts: Vec<String>,
    pub labels: Vec<String>,
}

impl TrainingCorpus {
    /// Loads the corpus from a CSV file. The file must carry both named
    /// columns and at least one row; anything less is a load error.
    pub fn load(path: &Path, config: &TrainingConfig) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            ResumeClassifierError::CorpusLoad(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let headers = reader
            .headers()
            .map_err(|e| ResumeClassifierError::CorpusLoad(format!("Unreadable header row: {}", e)))?
            .clone();

        let text_idx = headers
            .iter()
            .position(|h| h == config.text_column)
            .ok_or_else(|| {
                ResumeClassifierError::CorpusLoad(format!(
                    "Corpus must contain a '{}' column",
                    config.text_column
                ))
            })?;
        let label_idx = headers
            .iter()
            .position(|h| h == config.label_column)
            .ok_or_else(|| {
                ResumeClassifierError::CorpusLoad(format!(
                    "Corpus must contain a '{}' column",
                    config.label_column
                ))
            })?;

        let mut texts = Vec::new();
        let mut labels = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| {
                ResumeClassifierError::CorpusLoad(format!("Malformed corpus row: {}", e))
            })?;
            let text = record.get(text_idx).unwrap_or("").to_string();
            let label = record.get(label_idx).unwrap_or("").to_string();
            texts.push(text);
            labels.push(label);
        }

        if texts.is_empty() {
            return Err(ResumeClassifierError::CorpusLoad(
                "Corpus contains no rows".to_string(),
            ));
        }

        Ok(Self { texts, labels })
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::io::Write;

    fn write_corpus(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_corpus() {
        let file = write_corpus(
            "Resume,Category\nPython programming,Data Science\nHTML and CSS,Web Developer\n",
        );
        let config = Config::default().training;
        let corpus = TrainingCorpus::load(file.path(), &config).unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.labels, vec!["Data Science", "Web Developer"]);
    }

    #[test]
    fn test_missing_label_column_is_fatal() {
        let file = write_corpus("Resume,Something\nPython programming,x\n");
        let config = Config::default().training;
        let result = TrainingCorpus::load(file.path(), &config);

        assert!(matches!(result, Err(ResumeClassifierError::CorpusLoad(_))));
    }

    #[test]
    fn test_missing_text_column_is_fatal() {
        let file = write_corpus("Body,Category\nPython programming,Data Science\n");
        let config = Config::default().training;
        let result = TrainingCorpus::load(file.path(), &config);

        assert!(matches!(result, Err(ResumeClassifierError::CorpusLoad(_))));
    }

    #[test]
    fn test_empty_corpus_is_fatal() {
        let file = write_corpus("Resume,Category\n");
        let config = Config::default().training;
        let result = TrainingCorpus::load(file.path(), &config);

        assert!(matches!(result, Err(ResumeClassifierError::CorpusLoad(_))));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let config = Config::default().training;
        let result = TrainingCorpus::load(Path::new("does/not/exist.csv"), &config);

        assert!(matches!(result, Err(ResumeClassifierError::CorpusLoad(_))));
    }
}

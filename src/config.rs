//! Configuration management for the resume classifier

use crate::error::{Result, ResumeClassifierError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ingest: IngestConfig,
    pub training: TrainingConfig,
    pub skills: SkillsConfig,
    pub jobs: JobsConfig,
    pub output: OutputConfig,
}

/// Boundary constraints on uploaded documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Documents larger than this are rejected before extraction
    pub max_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Path to the labeled CSV corpus
    pub corpus_path: PathBuf,
    /// Column holding the document text
    pub text_column: String,
    /// Column holding the category label
    pub label_column: String,
    /// Cap on the learned feature space
    pub max_features: usize,
    /// N-grams of length 1..=ngram_max become features
    pub ngram_max: usize,
    /// Iteration bound for the per-label optimizer
    pub max_iterations: usize,
    pub learning_rate: f64,
    pub l2_penalty: f64,
    /// Convergence threshold on the largest coefficient update
    pub tolerance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsConfig {
    /// Fixed skill vocabulary, matched in this order
    pub vocabulary: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsConfig {
    pub endpoint: String,
    pub default_limit: usize,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ingest: IngestConfig {
                max_bytes: 2 * 1024 * 1024,
            },
            training: TrainingConfig {
                corpus_path: PathBuf::from("data/resume_corpus.csv"),
                text_column: "Resume".to_string(),
                label_column: "Category".to_string(),
                max_features: 10_000,
                ngram_max: 3,
                max_iterations: 1500,
                learning_rate: 1.0,
                l2_penalty: 0.1,
                tolerance: 1e-6,
            },
            skills: SkillsConfig {
                vocabulary: default_skill_vocabulary(),
            },
            jobs: JobsConfig {
                endpoint: "https://remotive.com/api/remote-jobs".to_string(),
                default_limit: 5,
                timeout_secs: 10,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ResumeClassifierError::Configuration(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeClassifierError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-classifier")
            .join("config.toml")
    }
}

/// Skill terms recognized by the matcher, in match-priority order.
/// Multi-word entries are matched as contiguous substrings.
fn default_skill_vocabulary() -> Vec<String> {
    [
        "python", "java", "c", "c++", "html", "css", "javascript", "typescript", "sql", "mysql",
        "oracle", "mongodb", "data science", "machine learning", "deep learning",
        "artificial intelligence", "computer vision", "nlp", "cloud computing", "azure", "aws",
        "google cloud", "docker", "kubernetes", "git", "github", "embedded systems", "arduino",
        "raspberry pi", "networking", "linux", "windows", "cybersecurity", "blockchain",
        "hardware design", "soldering", "microcontroller programming", "excel", "powerpoint",
        "autocad", "matlab", "labview", "testing", "automation", "robotics", "communication",
        "teamwork", "leadership", "problem solving", "critical thinking", "creative thinking",
        "adaptability", "time management", "collaboration", "negotiation", "presentation",
        "active listening", "decision making", "conflict resolution", "public speaking",
        "research", "self-motivation", "organization", "project management",
        "interpersonal skills",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.ingest.max_bytes, 2 * 1024 * 1024);
        assert_eq!(parsed.training.max_features, 10_000);
        assert_eq!(parsed.training.ngram_max, 3);
        assert_eq!(parsed.jobs.default_limit, 5);
        assert_eq!(parsed.skills.vocabulary, config.skills.vocabulary);
    }

    #[test]
    fn test_vocabulary_starts_with_python() {
        let vocabulary = default_skill_vocabulary();
        assert_eq!(vocabulary[0], "python");
        assert!(vocabulary.contains(&"machine learning".to_string()));
    }
}

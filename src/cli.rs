//! CLI interface for the resume classifier

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-classifier")]
#[command(about = "Resume skill extraction and career category prediction")]
#[command(
    long_about = "Extract skills from a resume (TXT, PDF, DOCX), predict a career category with a model trained at startup, and optionally look up matching remote job listings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full analysis: extract text, match skills, predict a category
    Analyze {
        /// Path to the resume file (TXT, PDF, DOCX)
        file: PathBuf,

        /// Also fetch remote job listings for the predicted category
        #[arg(short, long)]
        jobs: bool,

        /// Maximum number of job listings to fetch
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Predict a career category for raw text
    Predict {
        /// Skills or resume text to classify
        text: String,

        /// Also fetch remote job listings for the predicted category
        #[arg(short, long)]
        jobs: bool,

        /// Maximum number of job listings to fetch
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Extract known skills from a resume file
    Skills {
        /// Path to the resume file (TXT, PDF, DOCX)
        file: PathBuf,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

//! Resume classifier: skill extraction and career category prediction

mod cli;
mod config;
mod error;
mod input;
mod jobs;
mod model;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ResumeClassifierError};
use input::file_detector::DocumentFormat;
use input::manager::{Document, InputManager};
use jobs::JobListingClient;
use log::{error, info, warn};
use model::pipeline::ModelState;
use output::formatter::formatter_for;
use output::report::AnalysisReport;
use processing::skill_matcher::SkillMatcher;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            file,
            jobs,
            limit,
            output,
        } => {
            let format = cli::parse_output_format(&output).map_err(ResumeClassifierError::InvalidInput)?;

            let text = extract_from_file(&file, &config).await?;
            let matcher = SkillMatcher::new(config.skills.vocabulary.clone())?;

            let mut report = AnalysisReport {
                skills: matcher.match_skills(&text),
                ..Default::default()
            };
            if report.skills.is_empty() {
                report.error = Some(ResumeClassifierError::NoSkillsFound.to_string());
            }

            // Training runs to completion before the first prediction
            let model = ModelState::train(&config.training);
            classify_into(&mut report, &model, &text, jobs, limit, &config).await;

            print_report(&report, &format, &config)
        }

        Commands::Predict {
            text,
            jobs,
            limit,
            output,
        } => {
            let format = cli::parse_output_format(&output).map_err(ResumeClassifierError::InvalidInput)?;

            let mut report = AnalysisReport::default();
            let model = ModelState::train(&config.training);
            classify_into(&mut report, &model, &text, jobs, limit, &config).await;

            print_report(&report, &format, &config)
        }

        Commands::Skills { file, output } => {
            let format = cli::parse_output_format(&output).map_err(ResumeClassifierError::InvalidInput)?;

            let text = extract_from_file(&file, &config).await?;
            let matcher = SkillMatcher::new(config.skills.vocabulary.clone())?;

            let mut report = AnalysisReport {
                skills: matcher.match_skills(&text),
                ..Default::default()
            };
            if report.skills.is_empty() {
                report.error = Some(ResumeClassifierError::NoSkillsFound.to_string());
            }

            print_report(&report, &format, &config)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| ResumeClassifierError::Configuration(e.to_string()))?;
                println!("{}", content);
                Ok(())
            }
            ConfigAction::Reset => {
                let config = Config::default();
                config.save()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
        },
    }
}

/// Reads a resume file and extracts plain text from it
async fn extract_from_file(path: &Path, config: &Config) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| {
            ResumeClassifierError::InvalidInput(format!("File has no extension: {}", path.display()))
        })?;
    let format = DocumentFormat::from_extension(extension);

    info!("Reading {} ({})", path.display(), format.as_str());
    let payload = tokio::fs::read(path).await?;

    let manager = InputManager::new(&config.ingest);
    manager.extract_text(&Document {
        payload: &payload,
        format,
    })
}

/// Runs the inference path and, when requested, the job listing lookup.
/// Classification failures become report messages, never process failures.
async fn classify_into(
    report: &mut AnalysisReport,
    model: &ModelState,
    text: &str,
    fetch_jobs: bool,
    limit: Option<usize>,
    config: &Config,
) {
    match model.predict(text) {
        Ok(category) => {
            if fetch_jobs {
                // Listing lookup is best-effort; a client that cannot even
                // be built degrades the same way a failed fetch does
                match JobListingClient::new(&config.jobs) {
                    Ok(client) => {
                        let limit = limit.unwrap_or(config.jobs.default_limit);
                        report.listings = client.fetch(&category, limit).await;
                    }
                    Err(e) => warn!("Job listing lookup unavailable: {}", e),
                }
            }
            report.category = Some(category);
        }
        Err(e) => {
            report.error = Some(e.to_string());
        }
    }
}

fn print_report(
    report: &AnalysisReport,
    format: &config::OutputFormat,
    config: &Config,
) -> Result<()> {
    let formatter = formatter_for(format, config.output.color_output);
    print!("{}", formatter.format_report(report)?);
    Ok(())
}

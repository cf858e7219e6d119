//! Report formatters for console and JSON output

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::AnalysisReport;
use colored::Colorize;

pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
}

pub struct ConsoleFormatter {
    use_colors: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn paint(&self, text: &str, bold: bool) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        if bold {
            text.bold().to_string()
        } else {
            text.cyan().to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();

        if !report.skills.is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                self.paint("Skills found:", true),
                report.skills_line()
            ));
        }

        if let Some(category) = &report.category {
            out.push_str(&format!(
                "{} {}\n",
                self.paint("Recommended career path:", true),
                self.paint(category, false)
            ));
        }

        if let Some(error) = &report.error {
            out.push_str(&format!("{} {}\n", self.paint("Note:", true), error));
        }

        if !report.listings.is_empty() {
            out.push_str(&format!("\n{}\n", self.paint("Matching job listings:", true)));
            for listing in &report.listings {
                out.push_str(&format!(
                    "  - {} at {} ({})\n    {}\n",
                    listing.title, listing.company, listing.location, listing.url
                ));
            }
        }

        Ok(out)
    }
}

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

pub fn formatter_for(format: &OutputFormat, use_colors: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

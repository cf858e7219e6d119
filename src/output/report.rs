//! Analysis result record handed to the presentation layer

use crate::jobs::JobListing;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Matched skill terms in vocabulary order
    pub skills: Vec<String>,

    /// Predicted career category; None when the model is unavailable or
    /// prediction was not requested
    pub category: Option<String>,

    /// User-facing error message, when applicable
    pub error: Option<String>,

    /// Job listings retrieved for the predicted category
    pub listings: Vec<JobListing>,
}

impl AnalysisReport {
    pub fn skills_line(&self) -> String {
        self.skills.join(", ")
    }
}

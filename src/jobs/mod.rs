//! Remote job listing retrieval
//!
//! The listing service is a best-effort collaborator: any network failure,
//! non-success status, or malformed response degrades to an empty list and
//! never surfaces as an error to the caller.

use crate::config::JobsConfig;
use crate::error::{Result, ResumeClassifierError};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub url: String,
    pub location: String,
}

#[derive(Debug, Deserialize)]
struct ListingResponse {
    #[serde(default)]
    jobs: Vec<ListingRecord>,
}

/// Every field is required; a record missing any of them fails decoding
/// for the whole response, which the caller treats as "no listings"
#[derive(Debug, Deserialize)]
struct ListingRecord {
    title: String,
    company_name: String,
    url: String,
    candidate_required_location: String,
}

pub struct JobListingClient {
    client: reqwest::Client,
    endpoint: String,
}

impl JobListingClient {
    pub fn new(config: &JobsConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                ResumeClassifierError::Network(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Fetches up to `limit` listings for a category. Never fails: problems
    /// are logged and an empty list is returned.
    pub async fn fetch(&self, category: &str, limit: usize) -> Vec<JobListing> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("search", category), ("limit", &limit.to_string())])
            .send()
            .await;

        let body = match response {
            Ok(resp) if resp.status().is_success() => match resp.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!("Failed to read job listing response: {}", e);
                    return Vec::new();
                }
            },
            Ok(resp) => {
                warn!("Job listing service returned {}", resp.status());
                return Vec::new();
            }
            Err(e) => {
                warn!("Job listing request failed: {}", e);
                return Vec::new();
            }
        };

        let listings = decode_listings(&body, limit);
        info!("Fetched {} job listings for '{}'", listings.len(), category);
        listings
    }
}

/// Decodes a listing response body, bounding the result at `limit`.
/// A body that does not match the expected shape yields an empty list.
pub fn decode_listings(body: &str, limit: usize) -> Vec<JobListing> {
    let response: ListingResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(e) => {
            warn!("Malformed job listing response: {}", e);
            return Vec::new();
        }
    };

    response
        .jobs
        .into_iter()
        .take(limit)
        .map(|record| JobListing {
            title: record.title,
            company: record.company_name,
            url: record.url,
            location: record.candidate_required_location,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_with_default_config() {
        let config = crate::config::Config::default();
        assert!(JobListingClient::new(&config.jobs).is_ok());
    }

    #[test]
    fn test_decode_valid_listings() {
        let body = r#"{"jobs": [
            {"title": "Data Scientist", "company_name": "Acme",
             "url": "https://example.com/1", "candidate_required_location": "Anywhere"},
            {"title": "ML Engineer", "company_name": "Globex",
             "url": "https://example.com/2", "candidate_required_location": "Europe"}
        ]}"#;

        let listings = decode_listings(body, 5);
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].company, "Acme");
        assert_eq!(listings[1].location, "Europe");
    }

    #[test]
    fn test_decode_respects_limit() {
        let body = r#"{"jobs": [
            {"title": "A", "company_name": "A", "url": "a", "candidate_required_location": "a"},
            {"title": "B", "company_name": "B", "url": "b", "candidate_required_location": "b"},
            {"title": "C", "company_name": "C", "url": "c", "candidate_required_location": "c"}
        ]}"#;

        assert_eq!(decode_listings(body, 2).len(), 2);
    }

    #[test]
    fn test_missing_company_yields_empty_list() {
        let body = r#"{"jobs": [
            {"title": "Data Scientist",
             "url": "https://example.com/1", "candidate_required_location": "Anywhere"}
        ]}"#;

        assert!(decode_listings(body, 5).is_empty());
    }

    #[test]
    fn test_garbage_body_yields_empty_list() {
        assert!(decode_listings("<html>not json</html>", 5).is_empty());
    }

    #[test]
    fn test_missing_jobs_key_yields_empty_list() {
        assert!(decode_listings(r#"{"job-count": 0}"#, 5).is_empty());
    }
}

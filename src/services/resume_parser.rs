use crate::core::resume::{normalize_batch, FileOutcome, ParsedResume};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the resume parsing service
#[derive(Debug, Error)]
pub enum ResumeParserError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Parser returned status {0}")]
    ApiError(u16),

    #[error("{0}")]
    ServiceError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for the external resume parsing service
///
/// The service accepts a raw file body and answers with either the extracted
/// resume JSON or `{"error": "..."}`. Calls are never retried.
pub struct ResumeParserClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl ResumeParserClient {
    /// Create a new parser client
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ResumeParserError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    /// Send one file to the parser
    pub async fn parse(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<ParsedResume, ResumeParserError> {
        let url = format!("{}/resumes/parse", self.base_url.trim_end_matches('/'));

        tracing::debug!("Parsing resume {} ({} bytes) via {}", file_name, bytes.len(), url);

        let mut request = self
            .client
            .post(&url)
            .header("Content-Type", content_type)
            .header("X-File-Name", file_name)
            .body(bytes);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(ResumeParserError::ApiError(response.status().as_u16()));
        }

        let json: Value = response.json().await?;

        if let Some(message) = json.get("error").and_then(|e| e.as_str()) {
            return Err(ResumeParserError::ServiceError(message.to_string()));
        }

        serde_json::from_value(json)
            .map_err(|e| ResumeParserError::InvalidResponse(format!("Failed to parse resume: {}", e)))
    }

    /// Parse a file and normalize it, reporting failure as a per-file error string
    pub async fn parse_and_normalize(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> FileOutcome {
        let result = self
            .parse(file_name, content_type, bytes)
            .await
            .map_err(|e| e.to_string());

        normalize_batch([(file_name.to_string(), result)])
            .pop()
            .unwrap_or_else(|| FileOutcome::failure(file_name, "No result produced"))
    }
}

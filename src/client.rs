// src/client.rs
//! HTTP boundary to the remote extraction and analysis services

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use tracing::{error, info, warn};

use crate::config::ServiceConfig;
use crate::error::SubmissionError;
use crate::types::{AnalysisResult, AnalyzeRequest, ExtractResponse};

const EXTRACT_TEXT_ENDPOINT: &str = "/extract-text";
const ANALYZE_ENDPOINT: &str = "/analyze";

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Create a client from the injected service configuration
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// PDF text extraction - sends the file bytes, receives the plain text.
    /// A service-detected problem arrives as a 200 with an `error` field and
    /// is surfaced verbatim; everything else that goes wrong is the generic
    /// extraction failure.
    pub async fn extract_text(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, SubmissionError> {
        let url = format!("{}{}", self.base_url, EXTRACT_TEXT_ENDPOINT);

        let form = Form::new().part(
            "file",
            Part::bytes(bytes)
                .file_name(file_name.to_string())
                .mime_str("application/pdf")
                .map_err(|_| SubmissionError::ExtractionFailed)?,
        );

        info!("Calling extraction service: {}", url);

        let response = match self.client.post(&url).multipart(form).send().await {
            Ok(response) => response,
            Err(err) => {
                error!("Extraction request failed: {}", err);
                return Err(SubmissionError::ExtractionFailed);
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!("Extraction service returned status {}", status);
            return Err(SubmissionError::ExtractionFailed);
        }

        let raw = match response.text().await {
            Ok(raw) => raw,
            Err(err) => {
                error!("Failed to read extraction response: {}", err);
                return Err(SubmissionError::ExtractionFailed);
            }
        };

        let body: ExtractResponse = match serde_json::from_str(&raw) {
            Ok(body) => body,
            Err(err) => {
                error!("Failed to parse extraction response: {} (raw: {})", err, raw);
                return Err(SubmissionError::ExtractionFailed);
            }
        };

        if let Some(message) = body.error {
            warn!("Extraction service reported: {}", message);
            return Err(SubmissionError::ExtractionService(message));
        }

        match body.text {
            Some(text) => Ok(text),
            None => {
                error!("Extraction response carried neither text nor error");
                Err(SubmissionError::ExtractionFailed)
            }
        }
    }

    /// Resume scoring - sends the resume and optional job description,
    /// returns the service's verdict untouched.
    pub async fn analyze(
        &self,
        resume: &str,
        jd: &str,
    ) -> Result<AnalysisResult, SubmissionError> {
        let url = format!("{}{}", self.base_url, ANALYZE_ENDPOINT);

        let payload = AnalyzeRequest {
            resume: resume.to_string(),
            jd: jd.to_string(),
        };

        info!("Calling analysis service: {}", url);

        let response = match self.client.post(&url).json(&payload).send().await {
            Ok(response) => response,
            Err(err) => {
                error!("Analysis request failed: {}", err);
                return Err(SubmissionError::AnalysisFailed);
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!("Analysis service returned status {}", status);
            return Err(SubmissionError::AnalysisFailed);
        }

        response.json::<AnalysisResult>().await.map_err(|err| {
            error!("Failed to parse analysis response: {}", err);
            SubmissionError::AnalysisFailed
        })
    }
}

// src/controller.rs
//! The submission state machine. One owner for all mutable session state,
//! two independently sequenced remote flows (extraction and analysis), each
//! `Idle -> Pending -> {Success | Failed} -> Idle`.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use tokio::sync::watch;
use tracing::error;

use crate::client::ServiceClient;
use crate::config::ServiceConfig;
use crate::error::SubmissionError;
use crate::types::AnalysisResult;

/// Everything the presentation layer renders from. Held in memory for the
/// session, never persisted. `error` and `result` are mutually exclusive
/// outcomes of the most recent analysis attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionState {
    pub resume_text: String,
    pub job_description: String,
    pub is_extracting: bool,
    pub is_analyzing: bool,
    pub error: Option<String>,
    pub result: Option<AnalysisResult>,
}

/// Mediates between user intent, the two remote services, and display
/// state. The controller is the only writer of [`SubmissionState`]; the
/// presentation layer renders snapshots from [`subscribe`] and has no logic
/// of its own. The score is never computed locally.
///
/// [`subscribe`]: SubmissionController::subscribe
pub struct SubmissionController {
    client: ServiceClient,
    state: watch::Sender<SubmissionState>,
    // Dispatch sequence per request class. A settling response whose
    // sequence is no longer current is stale and must not touch state.
    extract_seq: AtomicU64,
    analyze_seq: AtomicU64,
}

impl SubmissionController {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = ServiceClient::new(config)?;
        let (state, _) = watch::channel(SubmissionState::default());

        Ok(Self {
            client,
            state,
            extract_seq: AtomicU64::new(0),
            analyze_seq: AtomicU64::new(0),
        })
    }

    /// Watch state snapshots as they are published
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Current state snapshot
    pub fn snapshot(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    pub fn set_resume_text(&self, text: &str) {
        self.state.send_modify(|state| state.resume_text = text.to_string());
    }

    pub fn set_job_description(&self, text: &str) {
        self.state
            .send_modify(|state| state.job_description = text.to_string());
    }

    /// Send a picked file to the extraction service and replace the resume
    /// text with what comes back. Only the extracted text survives; the file
    /// bytes are not retained. Non-`.pdf` names fail fast without a request.
    pub async fn upload_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), SubmissionError> {
        if !file_name.ends_with(".pdf") {
            return Err(self.fail_fast(SubmissionError::UnsupportedFileType));
        }

        let mut seq = 0;
        self.state.send_modify(|state| {
            seq = self.extract_seq.fetch_add(1, Ordering::SeqCst) + 1;
            state.is_extracting = true;
            state.error = None;
        });

        let outcome = self.client.extract_text(file_name, bytes).await;

        self.state.send_modify(|state| {
            if self.extract_seq.load(Ordering::SeqCst) != seq {
                // A newer upload owns the flag now; discard this settle.
                return;
            }
            state.is_extracting = false;
            match &outcome {
                Ok(text) => {
                    state.resume_text = text.clone();
                    state.error = None;
                }
                Err(err) => state.error = Some(err.to_string()),
            }
        });

        outcome.map(|_| ())
    }

    /// Read a file from disk and upload it. The handle is dropped after the
    /// read; the suffix is checked before touching the filesystem.
    pub async fn upload_file_path(&self, path: &Path) -> Result<(), SubmissionError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();

        if !file_name.ends_with(".pdf") {
            return Err(self.fail_fast(SubmissionError::UnsupportedFileType));
        }

        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                error!("Failed to read {}: {}", path.display(), err);
                return Err(self.fail_fast(SubmissionError::ExtractionFailed));
            }
        };

        self.upload_file(&file_name, bytes).await
    }

    /// Score the current resume text against the (optional) job description.
    /// Accepting the request clears any previous `result` and `error` before
    /// the response is known, so a stale verdict is never shown alongside an
    /// in-flight one. Empty resume text fails fast without a request.
    pub async fn analyze(&self) -> Result<(), SubmissionError> {
        let (resume, jd) = {
            let state = self.state.borrow();
            (state.resume_text.clone(), state.job_description.clone())
        };

        if resume.trim().is_empty() {
            return Err(self.fail_fast(SubmissionError::MissingResume));
        }

        let mut seq = 0;
        self.state.send_modify(|state| {
            seq = self.analyze_seq.fetch_add(1, Ordering::SeqCst) + 1;
            state.is_analyzing = true;
            state.error = None;
            state.result = None;
        });

        let outcome = self.client.analyze(&resume, &jd).await;

        self.state.send_modify(|state| {
            if self.analyze_seq.load(Ordering::SeqCst) != seq {
                return;
            }
            state.is_analyzing = false;
            match &outcome {
                Ok(result) => {
                    state.result = Some(result.clone());
                    state.error = None;
                }
                Err(err) => state.error = Some(err.to_string()),
            }
        });

        outcome.map(|_| ())
    }

    /// Surface a local validation error without dispatching anything
    fn fail_fast(&self, err: SubmissionError) -> SubmissionError {
        self.state
            .send_modify(|state| state.error = Some(err.to_string()));
        err
    }
}

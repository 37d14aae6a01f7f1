// src/error.rs
//! Submission error taxonomy

use thiserror::Error;

/// Everything a submission can fail with. `Display` is the single
/// human-readable message shown to the user; nothing is retried
/// automatically and every variant leaves the session usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Local validation: the picked file is not a PDF. No request is issued.
    #[error("Please upload a PDF file")]
    UnsupportedFileType,

    /// Local validation: resume text is empty at analyze time. No request is issued.
    #[error("Please provide resume text")]
    MissingResume,

    /// The extraction service itself reported a problem (unreadable or
    /// scanned PDF); its message is passed through verbatim.
    #[error("{0}")]
    ExtractionService(String),

    /// Transport or HTTP failure while extracting.
    #[error("Failed to extract text from PDF")]
    ExtractionFailed,

    /// Transport or HTTP failure while analyzing.
    #[error("Failed to analyze resume")]
    AnalysisFailed,
}

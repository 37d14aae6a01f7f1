// src/lib.rs
//! Client-side submission engine for a remote resume-scoring service.
//!
//! [`SubmissionController`] owns the session state and sequences the two
//! remote calls (PDF text extraction, resume analysis); [`display`] derives
//! presentation values from a score. The scoring itself happens server-side.

pub mod client;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod types;

pub use client::ServiceClient;
pub use config::ServiceConfig;
pub use controller::{SubmissionController, SubmissionState};
pub use display::{progress_fraction, score_band, score_label, ScoreBand};
pub use error::SubmissionError;
pub use types::{AnalysisResult, AnalyzeRequest, ExtractResponse};

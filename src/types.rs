// src/types.rs
//! Wire types for the extraction and analysis endpoints

use serde::{Deserialize, Serialize};

/// Body POSTed to `/analyze`. `jd` may be empty - the job description is
/// optional and the service scores without it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub resume: String,
    pub jd: String,
}

/// The service's scoring verdict, stored verbatim. `out_of` comes from the
/// server and is not assumed to be 100; `suggestions` are in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: f64,
    pub out_of: f64,
    pub suggestions: Vec<String>,
}

/// `/extract-text` answers `{"text": ...}` on success or `{"error": ...}`
/// when it could not read the PDF, both with HTTP 200.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractResponse {
    pub text: Option<String>,
    pub error: Option<String>,
}

// src/error.rs
//
// Error type for the forensics pipeline. Callers branch on the variant:
// Validation means the input was unusable and the request is a client
// error; Processing means the pipeline itself failed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Input signal was empty or could not be decoded.
    #[error("invalid audio input: {0}")]
    Validation(String),

    /// Internal failure during feature extraction or analysis.
    #[error("forensic analysis failed: {0}")]
    Processing(String),
}

impl AnalysisError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AnalysisError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
